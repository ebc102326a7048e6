//! Extraction agent - structured facts from free text.

use super::{Agent, AgentError, ensure_supported, invoke_model};
use crate::ports::inference_gateway::{InferenceGateway, InferenceOptions};
use async_trait::async_trait;
use consilium_domain::{AgentResponse, ModelInfo, PromptTemplate, TaskRequest};
use std::sync::Arc;

/// Agent for extraction tasks.
///
/// Zero temperature: extraction output must be reproducible, and disagreement
/// between extraction agents should mean disagreement about the facts, not
/// sampling noise.
pub struct ExtractionAgent<G> {
    model: ModelInfo,
    gateway: Arc<G>,
}

impl<G: InferenceGateway> ExtractionAgent<G> {
    pub fn new(model: ModelInfo, gateway: Arc<G>) -> Self {
        Self { model, gateway }
    }
}

#[async_trait]
impl<G: InferenceGateway + 'static> Agent for ExtractionAgent<G> {
    fn model(&self) -> &ModelInfo {
        &self.model
    }

    async fn execute(&self, request: &TaskRequest) -> Result<AgentResponse, AgentError> {
        ensure_supported(&self.model, request)?;

        let options = InferenceOptions::default()
            .with_system_prompt(PromptTemplate::extraction_system())
            .with_temperature(0.0);

        Ok(invoke_model(self.gateway.as_ref(), &self.model, request, options).await)
    }
}
