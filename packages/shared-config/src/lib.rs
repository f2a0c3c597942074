//! Shared configuration types for songbridge services
//!
//! Both upstream adapters and the API server read their settings from
//! environment variables through the helpers in this crate, so defaults and
//! parsing rules stay identical across the workspace.

mod catalog;
mod error;
mod textgen;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ConfigResult};
pub use textgen::TextGenConfig;

use std::env;

/// Configuration shared by every songbridge service
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Music catalog search configuration
    pub catalog: CatalogConfig,

    /// Text-generation server configuration
    pub textgen: TextGenConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log filter directives (from RUST_LOG or LOG_LEVEL), `None` when unset
    pub log_level: Option<String>,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            catalog: CatalogConfig::from_env()?,
            textgen: TextGenConfig::from_env()?,
            environment: get_env_or_default("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .ok()
                .filter(|level| !level.trim().is_empty()),
        })
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

/// Check that an upstream base URL uses an http(s) scheme
pub(crate) fn validate_http_url(name: &str, url: &str) -> ConfigResult<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("expected http:// or https:// scheme, got '{}'", url),
        ))
    }
}

/// Reject zero-second timeouts, which reqwest would treat as instant expiry
pub(crate) fn validate_timeout(name: &str, secs: u64) -> ConfigResult<()> {
    if secs == 0 {
        return Err(ConfigError::ValidationError(format!(
            "{} must be greater than zero",
            name
        )));
    }
    Ok(())
}
