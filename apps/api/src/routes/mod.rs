//! HTTP route handlers for the songbridge API
//!
//! - `POST /search` - resolve a song/artist pair to a playable URL
//! - `POST /chat` - chat with the music assistant
//! - `POST /play_ai` - let the assistant pick a song from a conversation
//! - `GET /health` - liveness check

pub mod assistant;
pub mod health;
pub mod search;

pub use assistant::{assistant_router, AssistantState};
pub use health::health_router;
pub use search::{search_router, SearchState};

use axum::Router;

/// Build the full API router
///
/// Tracing and CORS layers are added by the caller so tests can drive the
/// bare routes.
pub fn api_router(search: SearchState, assistant: AssistantState) -> Router {
    Router::new()
        .merge(search_router(search))
        .merge(assistant_router(assistant))
        .nest("/health", health_router())
}

/// Trim a required string field, rejecting absent or blank values
pub(crate) fn required_field(
    value: Option<String>,
    name: &'static str,
) -> crate::ApiResult<String> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(crate::ApiError::MissingField(name)),
    }
}
