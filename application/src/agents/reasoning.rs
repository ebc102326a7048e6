//! Reasoning agent - open-ended question answering.

use super::{Agent, AgentError, ensure_supported, invoke_model};
use crate::ports::inference_gateway::{InferenceGateway, InferenceOptions};
use async_trait::async_trait;
use consilium_domain::{AgentResponse, ModelInfo, PromptTemplate, TaskRequest};
use std::sync::Arc;

/// Agent for general reasoning tasks.
///
/// Runs with moderate sampling temperature so independent agents in a
/// consensus round explore different reasoning paths.
pub struct ReasoningAgent<G> {
    model: ModelInfo,
    gateway: Arc<G>,
}

impl<G: InferenceGateway> ReasoningAgent<G> {
    pub fn new(model: ModelInfo, gateway: Arc<G>) -> Self {
        Self { model, gateway }
    }
}

#[async_trait]
impl<G: InferenceGateway + 'static> Agent for ReasoningAgent<G> {
    fn model(&self) -> &ModelInfo {
        &self.model
    }

    async fn execute(&self, request: &TaskRequest) -> Result<AgentResponse, AgentError> {
        ensure_supported(&self.model, request)?;

        let options = InferenceOptions::default()
            .with_system_prompt(PromptTemplate::reasoning_system())
            .with_temperature(0.7);

        Ok(invoke_model(self.gateway.as_ref(), &self.model, request, options).await)
    }
}
