//! Orchestrator - dispatches tasks to agents and reconciles their answers.
//!
//! The orchestrator owns agent selection and the failure/fallback policy; the
//! consensus validator owns agreement semantics. Errors are data at this
//! boundary: exhausting every candidate produces a failed [`TaskResult`], and
//! only missing configuration (no capable model at all) or cancellation
//! escalates to the caller as an error.

use crate::agents::{Agent, agent_for};
use crate::config::OrchestratorConfig;
use crate::ports::inference_gateway::InferenceGateway;
use consilium_domain::{
    AgentResponse, ConsensusValidator, DomainError, ModelInfo, ModelRegistry, TaskRequest,
    TaskResult,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors surfaced to the orchestrator's caller
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// No registered model covers the request's capability set
    #[error("configuration error: {0}")]
    Configuration(#[from] DomainError),

    /// The submission was cancelled before completing
    #[error("task cancelled")]
    Cancelled,
}

/// Coordinates one or more agents to answer a task.
///
/// Constructed once with an immutable registry, a gateway, and a consensus
/// validator (dependency injection, no ambient state); `submit` may then be
/// called concurrently from any number of tasks.
pub struct Orchestrator<G: InferenceGateway + 'static> {
    registry: Arc<ModelRegistry>,
    gateway: Arc<G>,
    validator: ConsensusValidator,
    config: OrchestratorConfig,
}

impl<G: InferenceGateway + 'static> Orchestrator<G> {
    pub fn new(
        registry: Arc<ModelRegistry>,
        gateway: Arc<G>,
        validator: ConsensusValidator,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            registry,
            gateway,
            validator,
            config,
        }
    }

    /// Submit a task and wait for its result.
    pub async fn submit(&self, request: TaskRequest) -> Result<TaskResult, OrchestratorError> {
        self.submit_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Submit a task with external cancellation.
    ///
    /// Cancelling the token aborts any still-pending agent invocations and
    /// returns [`OrchestratorError::Cancelled`].
    pub async fn submit_with_cancel(
        &self,
        request: TaskRequest,
        cancel: CancellationToken,
    ) -> Result<TaskResult, OrchestratorError> {
        let started = Instant::now();

        let required = request.required_capabilities();
        let candidates: Vec<ModelInfo> = self
            .registry
            .models_for(&required)?
            .into_iter()
            .cloned()
            .collect();

        let deadline = request.timeout.unwrap_or(self.config.default_timeout);
        let target = request.agent_count.unwrap_or(1).max(1);

        info!(
            "task {} ({}): {} candidate model(s), target agent count {}",
            request.id,
            request.kind,
            candidates.len(),
            target
        );

        if target == 1 {
            self.run_single(&request, candidates, deadline, &cancel, started)
                .await
        } else {
            self.run_fanout(&request, candidates, target, deadline, &cancel, started)
                .await
        }
    }

    /// Single-agent path: walk the candidate chain (primaries first, fallback
    /// last) until one succeeds.
    async fn run_single(
        &self,
        request: &TaskRequest,
        candidates: Vec<ModelInfo>,
        deadline: Duration,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<TaskResult, OrchestratorError> {
        let mut failures: Vec<String> = Vec::new();

        for model in candidates {
            let agent = agent_for(model, Arc::clone(&self.gateway));
            debug!("task {}: trying {}", request.id, agent.model().id);

            let response = tokio::select! {
                _ = cancel.cancelled() => return Err(OrchestratorError::Cancelled),
                response = execute_with_deadline(agent.as_ref(), request, deadline) => response,
            };

            if response.success {
                info!("task {}: answered by {}", request.id, response.agent);
                return Ok(TaskResult::single(response, elapsed_ms(started)));
            }

            warn!(
                "task {}: agent {} failed: {}",
                request.id,
                response.agent,
                response.error_detail()
            );
            failures.push(format!("{}: {}", response.agent, response.error_detail()));
        }

        Ok(TaskResult::failed(
            request.id.clone(),
            failures.join("; "),
            elapsed_ms(started),
        ))
    }

    /// Multi-agent path: bounded concurrent fan-out, one join point, then
    /// consensus over the full response set (failures included).
    async fn run_fanout(
        &self,
        request: &TaskRequest,
        candidates: Vec<ModelInfo>,
        target: usize,
        deadline: Duration,
        cancel: &CancellationToken,
        started: Instant,
    ) -> Result<TaskResult, OrchestratorError> {
        let fanout = target.min(self.config.max_fanout).min(candidates.len());
        if fanout < target {
            debug!(
                "task {}: clamped agent count from {} to {}",
                request.id, target, fanout
            );
        }

        let mut join_set = JoinSet::new();
        for (index, model) in candidates.into_iter().take(fanout).enumerate() {
            let agent = agent_for(model, Arc::clone(&self.gateway));
            let request = request.clone();

            join_set.spawn(async move {
                let response = execute_with_deadline(agent.as_ref(), &request, deadline).await;
                (index, response)
            });
        }

        let mut indexed: Vec<(usize, AgentResponse)> = Vec::with_capacity(fanout);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    join_set.abort_all();
                    return Err(OrchestratorError::Cancelled);
                }
                joined = join_set.join_next() => match joined {
                    Some(Ok((index, response))) => {
                        debug!(
                            "task {}: agent {} finished (success={})",
                            request.id, response.agent, response.success
                        );
                        indexed.push((index, response));
                    }
                    Some(Err(error)) => warn!("task {}: join error: {}", request.id, error),
                    None => break,
                }
            }
        }

        // Restore dispatch order so consensus tie-breaks are deterministic
        // regardless of completion order.
        indexed.sort_by_key(|(index, _)| *index);
        let responses: Vec<AgentResponse> = indexed.into_iter().map(|(_, r)| r).collect();

        let consensus = self.validator.evaluate(request, &responses);
        info!(
            "task {}: {} ({} contributor(s), confidence {:.2})",
            request.id,
            consensus.agreement,
            consensus.contributor_count(),
            consensus.confidence
        );

        Ok(TaskResult::consensus(consensus, elapsed_ms(started)))
    }
}

/// Run one agent with a deadline; a timeout or unsupported task becomes a
/// failed response attributed to that agent.
async fn execute_with_deadline(
    agent: &dyn Agent,
    request: &TaskRequest,
    deadline: Duration,
) -> AgentResponse {
    let model_id = agent.model().id.clone();

    match tokio::time::timeout(deadline, agent.execute(request)).await {
        Ok(Ok(response)) => response,
        Ok(Err(error)) => AgentResponse::failure(request.id.clone(), model_id, error.to_string()),
        Err(_) => AgentResponse::failure(
            request.id.clone(),
            model_id,
            format!("timed out after {}ms", deadline.as_millis()),
        ),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
