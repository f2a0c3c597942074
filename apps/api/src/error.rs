//! Error handling for the songbridge API
//!
//! One error enum for every handler, mapped to an HTTP status and a
//! `{"error": ..., "code": ...}` JSON body through Axum's `IntoResponse`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use songbridge_catalog_client::CatalogError;
use thiserror::Error;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for client-side handling
    pub code: &'static str,
}

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ========== Validation Errors ==========
    /// Missing or empty required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Request validation failed
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Body is not valid JSON for the route
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Generated text did not contain the expected answer
    #[error("could not extract {0} from the generated text")]
    ExtractionFailed(&'static str),

    // ========== Resource Errors ==========
    /// Nothing playable was found
    #[error("{0}")]
    NotFound(String),

    // ========== External Service Errors ==========
    /// Catalog search failed
    #[error("catalog search failed: {0}")]
    Catalog(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_)
            | Self::ValidationError(_)
            | Self::InvalidBody(_)
            | Self::ExtractionFailed(_) => StatusCode::BAD_REQUEST,

            Self::NotFound(_) => StatusCode::NOT_FOUND,

            Self::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::ExtractionFailed(_) => "EXTRACTION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Catalog(_) => "CATALOG_ERROR",
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidInput(msg) => Self::ValidationError(msg),
            e if e.is_not_found() => Self::NotFound(e.to_string()),
            e => Self::Catalog(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingField("song_title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ExtractionFailed("song").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("nothing".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Catalog("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_catalog_error_mapping() {
        let not_found: ApiError = CatalogError::NoResults("q".to_string()).into();
        assert!(matches!(not_found, ApiError::NotFound(_)));

        let missing_id: ApiError = CatalogError::MissingVideoId.into();
        assert!(matches!(missing_id, ApiError::NotFound(_)));

        let upstream: ApiError = CatalogError::Timeout(5).into();
        assert!(matches!(upstream, ApiError::Catalog(_)));

        let invalid: ApiError = CatalogError::InvalidInput("empty query".to_string()).into();
        assert!(matches!(invalid, ApiError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::MissingField("message").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "missing required field: message");
        assert_eq!(json["code"], "MISSING_FIELD");
    }
}
