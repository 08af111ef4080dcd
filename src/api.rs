//! Route adapters for the three inbound operations.
//!
//! The hosting layer owns routing, CORS and the HTTP server itself; these
//! adapters own the payload shapes, the gateway calls, and the status
//! conventions (200 on success, 400 on validation failure, 502 on
//! provider-side failure with a `{"error": {"kind", "message"}}` body).

use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::gateway::CompletionGateway;
use crate::prompt::{ESTIMATE_COST_LABEL, ESTIMATE_RESOURCES_LABEL, ESTIMATE_TIME_LABEL};
use crate::task::{CompletionRequest, TaskKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalRequest {
    pub job_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResponse {
    pub proposal_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub project_description: String,
}

/// The estimation reply, split into the sections the prompt asked for.
///
/// The model is instructed to answer under three labels; each parses into
/// its own field when present. `raw` always carries the full reply, so a
/// model that ignores the format loses nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<String>,
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponseRequest {
    pub incoming_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestResponseResponse {
    pub suggested_response: String,
}

/// JSON failure body shared by the three routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub message: String,
}

impl From<&GatewayError> for ErrorBody {
    fn from(err: &GatewayError) -> Self {
        ErrorBody {
            error: ErrorDetail {
                kind: err.kind().to_string(),
                message: err.to_string(),
            },
        }
    }
}

/// `POST /proposal` — generate a proposal for a job posting.
pub async fn propose(
    gateway: &CompletionGateway,
    request: ProposalRequest,
) -> Result<ProposalResponse, GatewayError> {
    let mut task = CompletionRequest::single(TaskKind::Proposal, request.job_description);
    if let Some(tone) = request.tone {
        task.fields.insert("tone".to_string(), tone);
    }
    if let Some(skills) = request.skills {
        task.fields.insert("skills".to_string(), skills);
    }
    let completion = gateway.run(&task).await?;
    Ok(ProposalResponse {
        proposal_text: completion.text,
    })
}

/// `POST /estimate` — estimate time, cost and resources for a project.
pub async fn estimate(
    gateway: &CompletionGateway,
    request: EstimateRequest,
) -> Result<EstimateResponse, GatewayError> {
    let task = CompletionRequest::single(TaskKind::Estimation, request.project_description);
    let completion = gateway.run(&task).await?;
    Ok(EstimateResponse::parse(&completion.text))
}

/// `POST /suggest-response` — suggest a reply to a client message.
pub async fn suggest_response(
    gateway: &CompletionGateway,
    request: SuggestResponseRequest,
) -> Result<SuggestResponseResponse, GatewayError> {
    let mut task =
        CompletionRequest::single(TaskKind::ResponseSuggestion, request.incoming_message);
    if let Some(tone) = request.tone {
        task.fields.insert("tone".to_string(), tone);
    }
    let completion = gateway.run(&task).await?;
    Ok(SuggestResponseResponse {
        suggested_response: completion.text,
    })
}

const SECTION_LABELS: [&str; 3] = [
    ESTIMATE_TIME_LABEL,
    ESTIMATE_COST_LABEL,
    ESTIMATE_RESOURCES_LABEL,
];

impl EstimateResponse {
    /// Pull the labeled sections out of the model's reply. Labels match
    /// case-insensitively at the start of a line; a section runs until the
    /// next label. Absent or empty sections parse to `None`.
    pub fn parse(text: &str) -> Self {
        EstimateResponse {
            estimated_time: section(text, ESTIMATE_TIME_LABEL),
            estimated_cost: section(text, ESTIMATE_COST_LABEL),
            resources: section(text, ESTIMATE_RESOURCES_LABEL),
            raw: text.to_string(),
        }
    }
}

fn section(text: &str, label: &str) -> Option<String> {
    let mut collected: Vec<&str> = Vec::new();
    let mut in_section = false;
    for line in text.lines() {
        if let Some(rest) = strip_label(line, label) {
            in_section = true;
            if !rest.is_empty() {
                collected.push(rest);
            }
            continue;
        }
        if in_section {
            if SECTION_LABELS
                .iter()
                .any(|other| strip_label(line, other).is_some())
            {
                break;
            }
            collected.push(line.trim());
        }
    }
    let joined = collected.join("\n").trim().to_string();
    if joined.is_empty() { None } else { Some(joined) }
}

/// `"Estimated Time: 3 weeks"` → `Some("3 weeks")`, tolerating leading
/// list markers and mismatched case.
fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let trimmed = line.trim().trim_start_matches(['-', '*', '#']).trim_start();
    let head = trimmed.get(..label.len())?;
    if !head.eq_ignore_ascii_case(label) {
        return None;
    }
    let rest = trimmed[label.len()..].trim_start();
    rest.strip_prefix(':').map(str::trim)
}
