//! Inference gateway port
//!
//! Defines the interface for invoking hosted inference endpoints. The core
//! never opens connections itself; agents call through this port and convert
//! any transport failure into a failed response.

use async_trait::async_trait;
use consilium_domain::ModelId;
use thiserror::Error;

/// Errors that can occur at the inference transport boundary
///
/// These never escape the agent layer: an agent maps a `GatewayError` into an
/// `AgentResponse` with `success = false`, and the orchestrator decides
/// whether to fall back.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("model not available: {0}")]
    ModelNotAvailable(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("request timed out")]
    Timeout,
}

/// Per-invocation options forwarded to the hosted endpoint
#[derive(Debug, Clone, Default)]
pub struct InferenceOptions {
    /// System prompt establishing the agent's role
    pub system_prompt: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Output length cap
    pub max_tokens: Option<u32>,
}

impl InferenceOptions {
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Raw output of one model invocation
#[derive(Debug, Clone)]
pub struct InferenceReply {
    /// The model's answer text
    pub content: String,
    /// Self-reported confidence, when the endpoint provides one
    pub score: Option<f64>,
}

impl InferenceReply {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score.clamp(0.0, 1.0));
        self
    }
}

/// Gateway to hosted inference endpoints
///
/// One outbound call per `invoke`; retries and fallback are orchestrator
/// policy, never transport policy.
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Invoke a hosted model with a payload and per-call options.
    async fn invoke(
        &self,
        model: &ModelId,
        payload: &str,
        options: &InferenceOptions,
    ) -> Result<InferenceReply, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = InferenceOptions::default()
            .with_system_prompt("be brief")
            .with_temperature(0.2)
            .with_max_tokens(512);

        assert_eq!(options.system_prompt.as_deref(), Some("be brief"));
        assert_eq!(options.temperature, Some(0.2));
        assert_eq!(options.max_tokens, Some(512));
    }

    #[test]
    fn test_reply_score_is_clamped() {
        let reply = InferenceReply::new("answer").with_score(1.4);
        assert_eq!(reply.score, Some(1.0));
    }
}
