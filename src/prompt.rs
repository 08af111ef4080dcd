//! Prompt templates. Pure string assembly; no state, no I/O.

use crate::error::GatewayError;
use crate::task::{CompletionRequest, TaskKind};

/// Upper bound on rendered prompt size in bytes. Longer inputs are truncated
/// rather than rejected, keeping outbound payloads bounded.
pub const MAX_PROMPT_BYTES: usize = 12_000;

const TRUNCATION_MARKER: &str = "...[truncated]";

/// Labels the estimation template asks the model to answer under. The
/// estimate adapter parses these back out of the reply.
pub const ESTIMATE_TIME_LABEL: &str = "Estimated Time";
pub const ESTIMATE_COST_LABEL: &str = "Estimated Cost";
pub const ESTIMATE_RESOURCES_LABEL: &str = "Resources";

/// A rendered prompt plus the fixed sampling parameters its template uses.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPrompt {
    pub text: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Render the prompt for a request, interpolating its fields verbatim.
///
/// Fails with a validation error when the task's required field is missing
/// or blank; nothing is sent to the provider in that case.
pub fn render(request: &CompletionRequest) -> Result<RenderedPrompt, GatewayError> {
    let input = request.primary_input()?;
    let (text, temperature, max_tokens) = match request.kind {
        TaskKind::Proposal => (proposal_prompt(request, input), 0.7, 1024),
        TaskKind::Estimation => (estimation_prompt(input), 0.3, 1024),
        TaskKind::ResponseSuggestion => (suggestion_prompt(request, input), 0.6, 512),
    };
    Ok(RenderedPrompt {
        text: truncate(text),
        temperature,
        max_tokens,
    })
}

fn proposal_prompt(request: &CompletionRequest, job_description: &str) -> String {
    let tone = request.parameter("tone").unwrap_or("professional");
    let skills = match request.parameter("skills") {
        Some(skills) => format!("Skills to highlight: {skills}\n\n"),
        None => String::new(),
    };
    format!(
        "You are an experienced freelancer writing a proposal for the job \
         posting below.\n\n\
         Job description:\n{job_description}\n\n\
         {skills}\
         Write a concise, {tone} proposal that addresses the client's needs \
         directly, mentions relevant experience, and ends with a clear call \
         to action. Return only the proposal text."
    )
}

fn estimation_prompt(project_description: &str) -> String {
    format!(
        "You are a project planning assistant. Estimate the project \
         described below.\n\n\
         Project description:\n{project_description}\n\n\
         Answer with exactly three labeled sections, nothing else:\n\
         {ESTIMATE_TIME_LABEL}: <expected duration>\n\
         {ESTIMATE_COST_LABEL}: <cost range in USD>\n\
         {ESTIMATE_RESOURCES_LABEL}: <team roles and tools needed>"
    )
}

fn suggestion_prompt(request: &CompletionRequest, incoming_message: &str) -> String {
    let tone = request.parameter("tone").unwrap_or("professional and friendly");
    format!(
        "You are helping a freelancer reply to a client.\n\n\
         Incoming message:\n{incoming_message}\n\n\
         Suggest a {tone} response that answers the message and moves the \
         conversation forward. Return only the suggested reply."
    )
}

fn truncate(text: String) -> String {
    if text.len() <= MAX_PROMPT_BYTES {
        return text;
    }
    let mut end = MAX_PROMPT_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{TRUNCATION_MARKER}", &text[..end])
}
