//! Cross-origin policy
//!
//! The API is called from a browser client, so every route must answer CORS
//! preflights. With `CORS_ORIGINS` set, only those origins are allowed;
//! otherwise any origin is.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from the configured origin list
///
/// Without a usable origin list the layer is fully permissive: any origin and
/// any request header.
pub fn build_cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .max_age(std::time::Duration::from_secs(3600));

    let allowed: Vec<HeaderValue> = origins
        .unwrap_or_default()
        .iter()
        .filter_map(|origin| {
            origin.parse().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                None
            })
        })
        .collect();

    if allowed.is_empty() {
        match origins {
            Some(_) => tracing::warn!("No valid CORS origins configured, allowing any origin"),
            None => tracing::info!("CORS_ORIGINS not set, allowing any origin"),
        }
        return base.allow_origin(Any).allow_headers(Any);
    }

    tracing::info!(
        "CORS configured with {} allowed origin(s): {:?}",
        allowed.len(),
        origins
    );
    base.allow_origin(allowed)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
}
