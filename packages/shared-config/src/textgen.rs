//! Text-generation server configuration

use crate::{get_env_or_default, parse_env, validate_http_url, validate_timeout, ConfigResult};

/// Local inference server (KoboldCpp-compatible) configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGenConfig {
    /// Inference server base URL
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Default number of tokens to generate
    pub max_length: u32,
}

impl TextGenConfig {
    /// Load text-generation configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            url: get_env_or_default("TEXTGEN_URL", "http://localhost:5001"),
            timeout_secs: parse_env("TEXTGEN_TIMEOUT", 60)?,
            max_length: parse_env("TEXTGEN_MAX_LENGTH", 80)?,
        };
        validate_http_url("TEXTGEN_URL", &config.url)?;
        validate_timeout("TEXTGEN_TIMEOUT", config.timeout_secs)?;
        Ok(config)
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Get the full URL for the generation endpoint
    pub fn generate_url(&self) -> String {
        format!("{}/api/v1/generate", self.url.trim_end_matches('/'))
    }
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:5001".to_string(),
            timeout_secs: 60,
            max_length: 80,
        }
    }
}
