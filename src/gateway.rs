//! The completion gateway: validate, render, call, extract.

use std::collections::HashMap;

use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::{ConfigError, GatewayError};
use crate::prompt;
use crate::provider::{ChatCompletionClient, CompletionTransport};
use crate::task::{CompletionRequest, TaskKind};

/// The text produced by a successful completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

/// Mediates between inbound task requests and the outbound LLM call.
///
/// Stateless: every call validates, renders one prompt, issues exactly one
/// provider request, and returns the extracted text or an error. Nothing
/// outlives a call, so concurrent use needs no synchronization.
pub struct CompletionGateway {
    transport: Box<dyn CompletionTransport>,
}

impl CompletionGateway {
    /// Build a gateway over any transport. Tests inject mocks here.
    pub fn new(transport: Box<dyn CompletionTransport>) -> Self {
        Self { transport }
    }

    /// Build a gateway backed by the real chat-completion client.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Box::new(ChatCompletionClient::new(config)?)))
    }

    /// Run one completion for `kind` over the given input fields.
    pub async fn complete(
        &self,
        kind: TaskKind,
        fields: HashMap<String, String>,
    ) -> Result<Completion, GatewayError> {
        self.run(&CompletionRequest::new(kind, fields)).await
    }

    /// Run one completion for an already-built request.
    pub async fn run(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let rendered = prompt::render(request)?;
        debug!(
            task = request.kind.as_str(),
            prompt_bytes = rendered.text.len(),
            "dispatching completion"
        );
        let text = self.transport.generate(&rendered).await?;
        Ok(Completion { text })
    }
}
