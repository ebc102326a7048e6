//! Task result - the envelope the orchestrator returns to its caller.

use super::request::TaskId;
use super::response::AgentResponse;
use crate::consensus::{Agreement, ConsensusResult};
use serde::{Deserialize, Serialize};

/// What the orchestrator produced for a task
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "path", content = "value", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// Single-agent path: the first successful response
    Single(AgentResponse),
    /// Multi-agent path: the reconciled consensus
    Consensus(ConsensusResult),
    /// Every candidate agent failed; the aggregated reasons
    Failed { reason: String },
}

/// Envelope returned by the orchestrator (terminal artifact)
///
/// Candidate exhaustion is represented here as data, not as an error: the
/// caller always gets a `TaskResult` once capable agents exist for the
/// request's capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    /// The task this result answers
    pub task_id: TaskId,
    /// Single response, consensus, or aggregated failure
    pub outcome: TaskOutcome,
    /// Overall status; no-consensus still counts as success
    pub success: bool,
    /// Wall-clock latency of the whole submission
    pub elapsed_ms: u64,
}

impl TaskResult {
    /// Wraps a single agent response.
    pub fn single(response: AgentResponse, elapsed_ms: u64) -> Self {
        Self {
            task_id: response.task_id.clone(),
            success: response.success,
            outcome: TaskOutcome::Single(response),
            elapsed_ms,
        }
    }

    /// Wraps a consensus result. Only a fully failed round (agreement
    /// [`Agreement::None`]) is unsuccessful; disagreement is a valid outcome.
    pub fn consensus(result: ConsensusResult, elapsed_ms: u64) -> Self {
        Self {
            task_id: result.task_id.clone(),
            success: result.agreement != Agreement::None,
            outcome: TaskOutcome::Consensus(result),
            elapsed_ms,
        }
    }

    /// Represents exhaustion of every candidate agent.
    pub fn failed(task_id: TaskId, reason: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            task_id,
            outcome: TaskOutcome::Failed {
                reason: reason.into(),
            },
            success: false,
            elapsed_ms,
        }
    }

    /// The answer payload, if the task produced one.
    pub fn payload(&self) -> Option<&str> {
        match &self.outcome {
            TaskOutcome::Single(response) if response.success => Some(&response.payload),
            TaskOutcome::Consensus(result) if result.agreement != Agreement::None => {
                Some(&result.payload)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::Agreement;

    #[test]
    fn test_single_success() {
        let response = AgentResponse::success(TaskId::new("t"), "m", "answer", 0.8);
        let result = TaskResult::single(response, 12);

        assert!(result.success);
        assert_eq!(result.payload(), Some("answer"));
        assert_eq!(result.elapsed_ms, 12);
    }

    #[test]
    fn test_single_failure() {
        let response = AgentResponse::failure(TaskId::new("t"), "m", "boom");
        let result = TaskResult::single(response, 5);

        assert!(!result.success);
        assert_eq!(result.payload(), None);
    }

    #[test]
    fn test_failed_envelope() {
        let result = TaskResult::failed(TaskId::new("t"), "m1: boom; m2: boom", 30);

        assert!(!result.success);
        assert!(matches!(result.outcome, TaskOutcome::Failed { .. }));
    }

    #[test]
    fn test_no_consensus_is_still_success() {
        let consensus = ConsensusResult {
            task_id: TaskId::new("t"),
            payload: "answer".to_string(),
            agreement: Agreement::NoConsensus,
            contributors: vec![AgentResponse::success(TaskId::new("t"), "m", "answer", 0.9)],
            confidence: 0.675,
        };
        let result = TaskResult::consensus(consensus, 100);

        assert!(result.success);
        assert_eq!(result.payload(), Some("answer"));
    }

    #[test]
    fn test_all_failed_consensus_is_failure() {
        let consensus = ConsensusResult {
            task_id: TaskId::new("t"),
            payload: String::new(),
            agreement: Agreement::None,
            contributors: vec![],
            confidence: 0.0,
        };
        let result = TaskResult::consensus(consensus, 100);

        assert!(!result.success);
        assert_eq!(result.payload(), None);
    }
}
