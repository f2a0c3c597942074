//! Health check HTTP route handlers
//!
//! - `GET /health` - Liveness check with version information
//! - `GET /health/live` - Same payload, kept for probe configurations that
//!   expect the `/live` suffix
//!
//! Upstream services are not probed; each request reports its own upstream
//! failures.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Create health check router
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(liveness_probe))
        .route("/live", get(liveness_probe))
}

/// Liveness probe returning status and version
async fn liveness_probe() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}
