//! HTTP adapter for the inference gateway port.
//!
//! Speaks a small JSON protocol to a hosted inference endpoint:
//! `POST {base}/v1/infer` with the model id, input, and options; the endpoint
//! replies with the output text and an optional confidence score. Transport
//! errors are mapped onto [`GatewayError`] variants; the agent layer converts
//! those into failed responses. No retries happen here.

use async_trait::async_trait;
use consilium_application::ports::inference_gateway::{
    GatewayError, InferenceGateway, InferenceOptions, InferenceReply,
};
use consilium_domain::ModelId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Wire request for one model invocation
#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    model: &'a str,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Wire response from the endpoint
#[derive(Debug, Deserialize)]
struct InvokeResponse {
    output: String,
    #[serde(default)]
    score: Option<f64>,
}

/// [`InferenceGateway`] adapter over a JSON-speaking HTTP endpoint.
pub struct HttpInferenceGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpInferenceGateway {
    /// Creates a gateway for the given endpoint base URL.
    ///
    /// The connect timeout guards only connection setup; per-invocation
    /// deadlines are the orchestrator's responsibility.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    /// Attaches a bearer token sent with every invocation.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn invoke_url(&self) -> String {
        format!("{}/v1/infer", self.base_url)
    }
}

#[async_trait]
impl InferenceGateway for HttpInferenceGateway {
    async fn invoke(
        &self,
        model: &ModelId,
        payload: &str,
        options: &InferenceOptions,
    ) -> Result<InferenceReply, GatewayError> {
        let body = InvokeRequest {
            model: model.as_str(),
            input: payload,
            system: options.system_prompt.as_deref(),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        debug!("invoking {} at {}", model, self.invoke_url());

        let mut request = self.client.post(self.invoke_url()).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else if e.is_connect() {
                GatewayError::Connection(e.to_string())
            } else {
                GatewayError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GatewayError::ModelNotAvailable(model.to_string()));
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "endpoint returned {}: {}",
                status,
                detail.chars().take(200).collect::<String>()
            )));
        }

        let parsed: InvokeResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("invalid response body: {}", e)))?;

        Ok(InferenceReply {
            content: parsed.output,
            score: parsed.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let gateway = HttpInferenceGateway::new("http://localhost:8080/").unwrap();
        assert_eq!(gateway.invoke_url(), "http://localhost:8080/v1/infer");
    }

    #[test]
    fn test_request_body_omits_unset_options() {
        let body = InvokeRequest {
            model: "claude-sonnet-4.5",
            input: "question",
            system: None,
            temperature: None,
            max_tokens: None,
        };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "claude-sonnet-4.5");
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_response_score_is_optional() {
        let parsed: InvokeResponse = serde_json::from_str(r#"{"output": "42"}"#).unwrap();
        assert_eq!(parsed.output, "42");
        assert!(parsed.score.is_none());

        let scored: InvokeResponse =
            serde_json::from_str(r#"{"output": "42", "score": 0.93}"#).unwrap();
        assert_eq!(scored.score, Some(0.93));
    }
}
