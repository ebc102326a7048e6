//! Agents - polymorphic units wrapping one hosted model each.
//!
//! Every agent shares the same contract: turn a [`TaskRequest`] into an
//! [`AgentResponse`]. Variants differ by role; the role is chosen from the
//! model's type tag, never by inspecting the concrete agent type. Transport
//! failures are converted into failed responses here, so the orchestrator
//! alone decides whether to retry or fall back.

pub mod extraction;
pub mod reasoning;
pub mod summarization;
pub mod verification;

pub use extraction::ExtractionAgent;
pub use reasoning::ReasoningAgent;
pub use summarization::SummarizationAgent;
pub use verification::VerificationAgent;

use crate::ports::inference_gateway::{InferenceGateway, InferenceOptions};
use async_trait::async_trait;
use consilium_domain::model::capability::format_capability_set;
use consilium_domain::{AgentResponse, ModelId, ModelInfo, ModelType, PromptTemplate, TaskRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Score assigned when the endpoint does not report one.
const DEFAULT_SCORE: f64 = 0.5;

/// Agent-level errors
///
/// Unlike transport failures, an unsupported task is detected before any
/// outbound call and fails fast; the orchestrator treats it like any other
/// recoverable agent failure and moves to the next candidate.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("agent '{agent}' does not support capabilities [{required}]")]
    UnsupportedTask { agent: ModelId, required: String },
}

/// A unit wrapping one hosted model that answers a task
#[async_trait]
pub trait Agent: Send + Sync {
    /// The model this agent wraps.
    fn model(&self) -> &ModelInfo;

    /// Execute the request, making exactly one outbound inference call.
    ///
    /// Transport failures come back as a response with `success = false`;
    /// only an unsupported capability set is an error.
    async fn execute(&self, request: &TaskRequest) -> Result<AgentResponse, AgentError>;
}

/// Builds the agent implementation matching the model's role family.
pub fn agent_for<G: InferenceGateway + 'static>(
    model: ModelInfo,
    gateway: Arc<G>,
) -> Box<dyn Agent> {
    match model.model_type {
        ModelType::Reasoning => Box::new(ReasoningAgent::new(model, gateway)),
        ModelType::Extraction => Box::new(ExtractionAgent::new(model, gateway)),
        ModelType::Verification => Box::new(VerificationAgent::new(model, gateway)),
        ModelType::Summarization => Box::new(SummarizationAgent::new(model, gateway)),
    }
}

/// Fail fast when the model does not cover the request's capability set.
pub(crate) fn ensure_supported(
    model: &ModelInfo,
    request: &TaskRequest,
) -> Result<(), AgentError> {
    let required = request.required_capabilities();
    if model.supports(&required) {
        Ok(())
    } else {
        Err(AgentError::UnsupportedTask {
            agent: model.id.clone(),
            required: format_capability_set(&required),
        })
    }
}

/// One outbound call, with transport failures folded into the response.
pub(crate) async fn invoke_model<G: InferenceGateway>(
    gateway: &G,
    model: &ModelInfo,
    request: &TaskRequest,
    options: InferenceOptions,
) -> AgentResponse {
    let prompt = PromptTemplate::task_prompt(request);

    match gateway.invoke(&model.id, &prompt, &options).await {
        Ok(reply) => {
            debug!("model {} answered task {}", model.id, request.id);
            AgentResponse::success(
                request.id.clone(),
                model.id.clone(),
                reply.content,
                reply.score.unwrap_or(DEFAULT_SCORE),
            )
        }
        Err(error) => {
            warn!("model {} failed on task {}: {}", model.id, request.id, error);
            AgentResponse::failure(request.id.clone(), model.id.clone(), error.to_string())
        }
    }
}
