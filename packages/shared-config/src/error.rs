//! Configuration error types

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable could not be parsed into the expected type
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    /// Upstream URL is not an http(s) URL
    #[error("invalid URL format for {0}: {1}")]
    InvalidUrl(String, String),

    /// Value parsed but is out of range
    #[error("configuration validation failed: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
