//! songbridge API library
//!
//! Exposes the router, configuration and error types so the binary and the
//! integration tests build the exact same application.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::{api_router, AssistantState, SearchState};
pub use services::AssistantService;
