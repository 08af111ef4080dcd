//! Task kinds and the completion request they travel in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// The three operations the gateway performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Write a proposal for a job posting.
    Proposal,
    /// Estimate time, cost and resources for a project.
    Estimation,
    /// Suggest a reply to an incoming client message.
    ResponseSuggestion,
}

impl TaskKind {
    /// The field this task's template interpolates. Requests missing it are
    /// rejected before any provider call.
    pub fn required_field(self) -> &'static str {
        match self {
            TaskKind::Proposal => "job_description",
            TaskKind::Estimation => "project_description",
            TaskKind::ResponseSuggestion => "incoming_message",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::Proposal => "proposal",
            TaskKind::Estimation => "estimation",
            TaskKind::ResponseSuggestion => "response_suggestion",
        }
    }
}

/// One completion request: a task kind plus its input fields.
///
/// Fields beyond the required one are optional template parameters
/// (currently `tone` and `skills`); unknown keys are ignored.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub kind: TaskKind,
    pub fields: HashMap<String, String>,
}

impl CompletionRequest {
    pub fn new(kind: TaskKind, fields: HashMap<String, String>) -> Self {
        Self { kind, fields }
    }

    /// Build a request carrying only the task's required field. The route
    /// adapters use this; extra parameters go through [`Self::new`].
    pub fn single(kind: TaskKind, value: impl Into<String>) -> Self {
        let mut fields = HashMap::new();
        fields.insert(kind.required_field().to_string(), value.into());
        Self { kind, fields }
    }

    /// The task's primary input, verified present and non-blank. The value
    /// is returned untrimmed; templates interpolate it verbatim.
    pub fn primary_input(&self) -> Result<&str, GatewayError> {
        let field = self.kind.required_field();
        match self.fields.get(field) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(GatewayError::validation(format!(
                "missing required field `{field}` for task `{}`",
                self.kind.as_str()
            ))),
        }
    }

    /// An optional template parameter, normalized to `None` when blank.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
