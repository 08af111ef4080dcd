//! Outbound chat-completion call: one POST, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::{ConfigError, GatewayError};
use crate::prompt::RenderedPrompt;

/// Transport seam between the gateway and the remote provider. Tests swap in
/// mocks here; production uses [`ChatCompletionClient`].
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Issue one completion call and return the generated text.
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<String, GatewayError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// reqwest-backed transport speaking the OpenAI-compatible chat wire format.
///
/// The client is built once with the configured timeout and shared across
/// concurrent calls; it holds no mutable state.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    endpoint_url: String,
    api_key: String,
    model_id: String,
}

impl ChatCompletionClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
        })
    }
}

#[async_trait]
impl CompletionTransport for ChatCompletionClient {
    #[tracing::instrument(name = "chat_completion", skip_all, fields(model = %self.model_id), err)]
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<String, GatewayError> {
        let body = ChatRequest {
            model: &self.model_id,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt.text,
            }],
            temperature: prompt.temperature,
            max_tokens: prompt.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "completion request failed");
                if e.is_timeout() {
                    GatewayError::network("provider call timed out")
                } else {
                    GatewayError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = %status, "provider returned error status");
            return Err(GatewayError::Provider {
                status: status.as_u16(),
                message: if detail.is_empty() {
                    "provider returned an empty error body".to_string()
                } else {
                    detail
                },
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| GatewayError::network(format!("failed to read response body: {e}")))?;

        let chat: ChatResponse = serde_json::from_str(&raw)
            .map_err(|e| GatewayError::parse(format!("invalid completion body: {e}")))?;

        debug!(choices = chat.choices.len(), "completion received");

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::parse("completion contained no choices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_request_serializes_to_the_provider_shape() {
        let body = ChatRequest {
            model: "llama3-8b-8192",
            messages: vec![ChatMessage {
                role: "user",
                content: "Write a proposal",
            }],
            temperature: 0.7,
            max_tokens: 1024,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "llama3-8b-8192");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Write a proposal");
        assert_eq!(value["max_tokens"], 1024);
    }

    #[test]
    fn chat_response_tolerates_extra_provider_fields() {
        let raw = json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "llama3-8b-8192",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "Here you go" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        });
        let parsed: ChatResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Here you go");
    }
}
