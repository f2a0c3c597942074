//! Catalog search error types

use thiserror::Error;

/// Catalog search client errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Invalid input provided to a search method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The search returned no candidates at all
    #[error("No results found for '{0}'")]
    NoResults(String),

    /// The selected candidate carries no playable identifier
    #[error("Video ID not found in search result")]
    MissingVideoId,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog answered with a non-success status
    #[error("Catalog API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Request timeout
    #[error("Request to catalog timed out after {0} seconds")]
    Timeout(u64),
}

impl CatalogError {
    /// Whether this error means "nothing playable was found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NoResults(_) | CatalogError::MissingVideoId)
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
