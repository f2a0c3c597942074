//! Music catalog search configuration

use crate::{get_env_or_default, parse_env, validate_http_url, validate_timeout, ConfigResult};

/// YouTube Music search endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog base URL
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Interface language sent in the client context (e.g. "en")
    pub language: String,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            url: get_env_or_default("CATALOG_URL", "https://music.youtube.com"),
            timeout_secs: parse_env("CATALOG_TIMEOUT", 5)?,
            language: get_env_or_default("CATALOG_LANGUAGE", "en"),
        };
        validate_http_url("CATALOG_URL", &config.url)?;
        validate_timeout("CATALOG_TIMEOUT", config.timeout_secs)?;
        Ok(config)
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Get the full URL for the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/youtubei/v1/search", self.url.trim_end_matches('/'))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: "https://music.youtube.com".to_string(),
            timeout_secs: 5,
            language: "en".to_string(),
        }
    }
}
