//! Agent response - one agent's answer to one task.

use super::request::TaskId;
use crate::model::info::ModelId;
use serde::{Deserialize, Serialize};

/// Response from a single agent for a given task (Value Object)
///
/// Created once per agent invocation and never mutated. A failed invocation
/// is still a response: `success` is false and `error` carries the reason, so
/// the orchestrator can decide whether to fall back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// The task this response answers
    pub task_id: TaskId,
    /// The model that produced this response
    pub agent: ModelId,
    /// The answer payload; empty on failure
    pub payload: String,
    /// Confidence score in `[0.0, 1.0]`
    pub score: f64,
    /// Whether the invocation succeeded
    pub success: bool,
    /// Failure detail when unsuccessful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentResponse {
    /// Creates a successful response. The score is clamped into `[0.0, 1.0]`.
    pub fn success(
        task_id: TaskId,
        agent: impl Into<ModelId>,
        payload: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            task_id,
            agent: agent.into(),
            payload: payload.into(),
            score: score.clamp(0.0, 1.0),
            success: true,
            error: None,
        }
    }

    /// Creates a failed response carrying the failure reason.
    pub fn failure(task_id: TaskId, agent: impl Into<ModelId>, error: impl Into<String>) -> Self {
        Self {
            task_id,
            agent: agent.into(),
            payload: String::new(),
            score: 0.0,
            success: false,
            error: Some(error.into()),
        }
    }

    /// Returns `true` if this response was produced successfully.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The failure reason, or an empty string for successful responses.
    pub fn error_detail(&self) -> &str {
        self.error.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response =
            AgentResponse::success(TaskId::new("t-1"), "claude-sonnet-4.5", "42", 0.9);

        assert!(response.is_success());
        assert_eq!(response.payload, "42");
        assert_eq!(response.score, 0.9);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_failure_response() {
        let response =
            AgentResponse::failure(TaskId::new("t-1"), "gpt-5-mini", "connection refused");

        assert!(!response.is_success());
        assert!(response.payload.is_empty());
        assert_eq!(response.score, 0.0);
        assert_eq!(response.error_detail(), "connection refused");
    }

    #[test]
    fn test_score_is_clamped() {
        let high = AgentResponse::success(TaskId::new("t"), "m", "x", 1.7);
        assert_eq!(high.score, 1.0);

        let low = AgentResponse::success(TaskId::new("t"), "m", "x", -0.2);
        assert_eq!(low.score, 0.0);
    }

    #[test]
    fn test_error_field_is_omitted_when_none() {
        let response = AgentResponse::success(TaskId::new("t"), "m", "x", 0.5);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("\"error\""));
    }
}
