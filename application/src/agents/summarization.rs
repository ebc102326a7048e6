//! Summarization agent - condenses input into a short answer.

use super::{Agent, AgentError, ensure_supported, invoke_model};
use crate::ports::inference_gateway::{InferenceGateway, InferenceOptions};
use async_trait::async_trait;
use consilium_domain::{AgentResponse, ModelInfo, PromptTemplate, TaskRequest};
use std::sync::Arc;

/// Agent for summarization tasks.
pub struct SummarizationAgent<G> {
    model: ModelInfo,
    gateway: Arc<G>,
}

impl<G: InferenceGateway> SummarizationAgent<G> {
    pub fn new(model: ModelInfo, gateway: Arc<G>) -> Self {
        Self { model, gateway }
    }
}

#[async_trait]
impl<G: InferenceGateway + 'static> Agent for SummarizationAgent<G> {
    fn model(&self) -> &ModelInfo {
        &self.model
    }

    async fn execute(&self, request: &TaskRequest) -> Result<AgentResponse, AgentError> {
        ensure_supported(&self.model, request)?;

        let options = InferenceOptions::default()
            .with_system_prompt(PromptTemplate::summarization_system())
            .with_temperature(0.3)
            .with_max_tokens(1024);

        Ok(invoke_model(self.gateway.as_ref(), &self.model, request, options).await)
    }
}
