//! Consensus validator - reconciles multiple agent responses into one result.

use super::agreement::Agreement;
use super::similarity::{SimilarityPolicy, TokenOverlap};
use crate::task::request::{TaskId, TaskRequest};
use crate::task::response::AgentResponse;
use serde::{Deserialize, Serialize};

/// Default fraction subtracted from the winner's score when no consensus
/// forms. A deployment decision; configuration may override it.
pub const DEFAULT_DISAGREEMENT_PENALTY: f64 = 0.25;

/// The reconciled answer for one task (terminal artifact)
///
/// References only responses for a single task; `contributors` holds the
/// responses that back the chosen payload (empty when every agent failed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// The task the contributing responses answered
    pub task_id: TaskId,
    /// Chosen or merged payload; empty when agreement is `None`
    pub payload: String,
    /// How strongly the agents agreed
    pub agreement: Agreement,
    /// Responses backing the chosen payload
    pub contributors: Vec<AgentResponse>,
    /// Final confidence score in `[0.0, 1.0]`
    pub confidence: f64,
}

impl ConsensusResult {
    /// Result for a round in which every agent failed.
    pub fn none(task_id: TaskId) -> Self {
        Self {
            task_id,
            payload: String::new(),
            agreement: Agreement::None,
            contributors: Vec::new(),
            confidence: 0.0,
        }
    }

    /// Number of responses backing the chosen payload.
    pub fn contributor_count(&self) -> usize {
        self.contributors.len()
    }
}

/// Stateless evaluator for one round of agent responses.
///
/// Given the full response set for a task (failures included), decides the
/// agreement level, the winning payload, and the final confidence:
///
/// - all failed → [`Agreement::None`], empty contributor set
/// - all successful responses agree → [`Agreement::Unanimous`], confidence is
///   the mean of contributing scores
/// - a strict majority agrees → [`Agreement::Majority`], confidence is the
///   majority's mean score weighted by majority size over respondents
/// - otherwise → [`Agreement::NoConsensus`], the highest-scoring response
///   wins (first in input order on ties) and its score is discounted by the
///   disagreement penalty
///
/// Evaluation is deterministic for identical input order; the orchestrator
/// hands responses over in agent-dispatch order, not completion order.
pub struct ConsensusValidator {
    policy: Box<dyn SimilarityPolicy>,
    penalty: f64,
}

impl ConsensusValidator {
    /// Creates a validator with an injected similarity policy.
    pub fn new(policy: Box<dyn SimilarityPolicy>, disagreement_penalty: f64) -> Self {
        Self {
            policy,
            penalty: disagreement_penalty.clamp(0.0, 1.0),
        }
    }

    /// Validator with the default token-overlap policy and penalty.
    pub fn with_defaults() -> Self {
        Self::new(
            Box::new(TokenOverlap::default()),
            DEFAULT_DISAGREEMENT_PENALTY,
        )
    }

    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Reconciles the responses for `request` into a single result.
    pub fn evaluate(&self, request: &TaskRequest, responses: &[AgentResponse]) -> ConsensusResult {
        debug_assert!(
            responses.iter().all(|r| r.task_id == request.id),
            "responses from a different task passed to evaluate"
        );

        let successful: Vec<&AgentResponse> = responses.iter().filter(|r| r.success).collect();

        if successful.is_empty() {
            return ConsensusResult::none(request.id.clone());
        }

        // Cluster successful responses by payload agreement. Each response
        // joins the first cluster whose representative it agrees with, so
        // clustering is stable under identical input order.
        let mut clusters: Vec<Vec<usize>> = Vec::new();
        for (index, response) in successful.iter().enumerate() {
            let representative = clusters
                .iter_mut()
                .find(|c| self.policy.agree(&successful[c[0]].payload, &response.payload));
            match representative {
                Some(cluster) => cluster.push(index),
                None => clusters.push(vec![index]),
            }
        }

        let total = successful.len();

        if clusters.len() == 1 {
            let contributors: Vec<AgentResponse> =
                successful.iter().map(|r| (*r).clone()).collect();
            let confidence = mean_score(&contributors);
            return ConsensusResult {
                task_id: request.id.clone(),
                payload: contributors[0].payload.clone(),
                agreement: Agreement::Unanimous,
                contributors,
                confidence,
            };
        }

        // First-seen cluster wins size ties, keeping the choice reproducible.
        let mut largest = &clusters[0];
        for cluster in &clusters[1..] {
            if cluster.len() > largest.len() {
                largest = cluster;
            }
        }

        if largest.len() * 2 > total {
            let contributors: Vec<AgentResponse> =
                largest.iter().map(|&i| successful[i].clone()).collect();
            let weight = contributors.len() as f64 / total as f64;
            let confidence = (mean_score(&contributors) * weight).clamp(0.0, 1.0);
            return ConsensusResult {
                task_id: request.id.clone(),
                payload: contributors[0].payload.clone(),
                agreement: Agreement::Majority,
                contributors,
                confidence,
            };
        }

        // No majority: take the single most confident response, first in
        // input order on ties, and discount for the disagreement.
        let mut best = successful[0];
        for response in &successful[1..] {
            if response.score > best.score {
                best = response;
            }
        }

        ConsensusResult {
            task_id: request.id.clone(),
            payload: best.payload.clone(),
            agreement: Agreement::NoConsensus,
            confidence: (best.score * (1.0 - self.penalty)).clamp(0.0, 1.0),
            contributors: vec![best.clone()],
        }
    }
}

fn mean_score(responses: &[AgentResponse]) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }
    responses.iter().map(|r| r.score).sum::<f64>() / responses.len() as f64
}
