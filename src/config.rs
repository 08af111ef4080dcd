//! Provider credential and gateway settings, read once at startup.

use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

pub const API_KEY_VAR: &str = "BIDKIT_API_KEY";
pub const API_URL_VAR: &str = "BIDKIT_API_URL";
pub const MODEL_VAR: &str = "BIDKIT_MODEL";
pub const TIMEOUT_VAR: &str = "BIDKIT_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable provider configuration shared by every gateway call.
///
/// Constructed once at process start and injected where needed; nothing in
/// the crate reads ambient state after that. There is no fallback API key:
/// construction fails when the credential is absent.
#[derive(Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub endpoint_url: String,
    pub model_id: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Create a configuration with the default endpoint, model and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey { var: API_KEY_VAR });
        }
        Ok(Self {
            api_key,
            endpoint_url: DEFAULT_API_URL.to_string(),
            model_id: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the configuration from the environment. `BIDKIT_API_KEY` is
    /// required; the endpoint, model and timeout fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;

        let mut config = Self::new(api_key)?;

        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config = config.with_endpoint_url(url);
        }
        if let Some(model) = lookup(MODEL_VAR).filter(|model| !model.trim().is_empty()) {
            config = config.with_model_id(model);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|raw| !raw.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: TIMEOUT_VAR,
                message: format!("`{raw}` is not a number of seconds"),
            })?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    message: "timeout must be at least one second".to_string(),
                });
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

// The credential must never leak through logs or panics.
impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint_url", &self.endpoint_url)
            .field("model_id", &self.model_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}
