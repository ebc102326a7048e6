//! Scripted inference gateway double for unit tests.

use crate::ports::inference_gateway::{
    GatewayError, InferenceGateway, InferenceOptions, InferenceReply,
};
use async_trait::async_trait;
use consilium_domain::ModelId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum StubOutcome {
    Reply { content: String, score: Option<f64> },
    Fail(String),
    Slow { content: String, delay: Duration },
}

/// In-memory [`InferenceGateway`] answering from a per-model script.
///
/// Unknown models fail with `ModelNotAvailable`; every invocation is counted
/// so tests can assert that configuration errors short-circuit before any
/// outbound call.
pub(crate) struct StubGateway {
    outcomes: HashMap<String, StubOutcome>,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a successful reply with an endpoint-reported score.
    pub fn reply(mut self, model: &str, content: &str, score: f64) -> Self {
        self.outcomes.insert(
            model.to_string(),
            StubOutcome::Reply {
                content: content.to_string(),
                score: Some(score),
            },
        );
        self
    }

    /// Script a successful reply without a score.
    pub fn reply_unscored(mut self, model: &str, content: &str) -> Self {
        self.outcomes.insert(
            model.to_string(),
            StubOutcome::Reply {
                content: content.to_string(),
                score: None,
            },
        );
        self
    }

    /// Script a transport failure.
    pub fn fail(mut self, model: &str, reason: &str) -> Self {
        self.outcomes
            .insert(model.to_string(), StubOutcome::Fail(reason.to_string()));
        self
    }

    /// Script a reply that only arrives after `delay`.
    pub fn slow(mut self, model: &str, content: &str, delay: Duration) -> Self {
        self.outcomes.insert(
            model.to_string(),
            StubOutcome::Slow {
                content: content.to_string(),
                delay,
            },
        );
        self
    }

    /// Number of invocations seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceGateway for StubGateway {
    async fn invoke(
        &self,
        model: &ModelId,
        _payload: &str,
        _options: &InferenceOptions,
    ) -> Result<InferenceReply, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.outcomes.get(model.as_str()) {
            Some(StubOutcome::Reply { content, score }) => Ok(InferenceReply {
                content: content.clone(),
                score: *score,
            }),
            Some(StubOutcome::Fail(reason)) => Err(GatewayError::RequestFailed(reason.clone())),
            Some(StubOutcome::Slow { content, delay }) => {
                tokio::time::sleep(*delay).await;
                Ok(InferenceReply {
                    content: content.clone(),
                    score: None,
                })
            }
            None => Err(GatewayError::ModelNotAvailable(model.to_string())),
        }
    }
}
