//! Verification agent - checks a candidate answer for correctness.

use super::{Agent, AgentError, ensure_supported, invoke_model};
use crate::ports::inference_gateway::{InferenceGateway, InferenceOptions};
use async_trait::async_trait;
use consilium_domain::{AgentResponse, ModelInfo, PromptTemplate, TaskRequest};
use std::sync::Arc;

/// Agent for verification tasks.
///
/// Deterministic sampling and a short output budget: a verifier either
/// confirms the candidate or replaces it, nothing more.
pub struct VerificationAgent<G> {
    model: ModelInfo,
    gateway: Arc<G>,
}

impl<G: InferenceGateway> VerificationAgent<G> {
    pub fn new(model: ModelInfo, gateway: Arc<G>) -> Self {
        Self { model, gateway }
    }
}

#[async_trait]
impl<G: InferenceGateway + 'static> Agent for VerificationAgent<G> {
    fn model(&self) -> &ModelInfo {
        &self.model
    }

    async fn execute(&self, request: &TaskRequest) -> Result<AgentResponse, AgentError> {
        ensure_supported(&self.model, request)?;

        let options = InferenceOptions::default()
            .with_system_prompt(PromptTemplate::verification_system())
            .with_temperature(0.0)
            .with_max_tokens(512);

        Ok(invoke_model(self.gateway.as_ref(), &self.model, request, options).await)
    }
}
