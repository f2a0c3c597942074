//! Error types for the text-generation client

use thiserror::Error;

/// Errors that can occur when talking to the inference server
#[derive(Error, Debug)]
pub enum TextGenError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize/deserialize JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Inference server answered with a non-success status
    #[error("text-generation API error: {0}")]
    ApiError(String),

    /// Request timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection refused (inference server not running)
    #[error("Connection refused. Is the text-generation server running at {0}?")]
    ConnectionRefused(String),
}

/// Result type for text-generation operations
pub type TextGenResult<T> = Result<T, TextGenError>;
