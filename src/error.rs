use thiserror::Error;

/// Errors produced by the completion gateway.
///
/// Each variant maps to a stable machine-readable kind (`kind`) used in the
/// JSON error body, and to an HTTP status (`http_status`) the hosting layer
/// returns. Failures are never retried and never swallowed.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The inbound request was missing or blanked a required field. Raised
    /// before any provider call is made.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// The provider could not be reached, or the call timed out.
    #[error("network error: {message}")]
    Network { message: String },

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider body was not the expected completion shape. Covers
    /// malformed JSON and a well-formed body with no choices.
    #[error("unexpected provider response: {message}")]
    Parse { message: String },
}

impl GatewayError {
    pub fn validation(message: impl Into<String>) -> Self {
        GatewayError::Validation {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        GatewayError::Parse {
            message: message.into(),
        }
    }

    /// Stable machine-readable kind carried in the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation { .. } => "validation_error",
            GatewayError::Network { .. } => "network_error",
            GatewayError::Provider { .. } => "provider_error",
            GatewayError::Parse { .. } => "parse_error",
        }
    }

    /// HTTP status the hosting layer returns for this error: 400 for local
    /// validation failures, 502 for anything that went wrong provider-side.
    pub fn http_status(&self) -> u16 {
        match self {
            GatewayError::Validation { .. } => 400,
            GatewayError::Network { .. }
            | GatewayError::Provider { .. }
            | GatewayError::Parse { .. } => 502,
        }
    }
}

/// Startup-time configuration failures. Distinct from [`GatewayError`]
/// because nothing here is reportable to an inbound caller; the process
/// should refuse to start instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider credential is absent. There is deliberately no built-in
    /// fallback key.
    #[error("{var} is not set; a provider API key is required")]
    MissingApiKey { var: &'static str },

    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
