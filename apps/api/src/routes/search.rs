//! Song lookup route
//!
//! - `POST /search` - Resolve `{song_title, artist_name}` to `{url, title, artist}`

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::Deserialize;
use songbridge_catalog_client::{CatalogClient, PlayableResult};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::routes::required_field;

/// Shared state for the search handler
#[derive(Clone)]
pub struct SearchState {
    /// Catalog search client
    pub catalog: Arc<CatalogClient>,
}

impl SearchState {
    pub fn new(catalog: CatalogClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Create the search router
pub fn search_router(state: SearchState) -> Router {
    Router::new()
        .route("/search", post(search))
        .with_state(state)
}

/// Search request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub song_title: Option<String>,
    pub artist_name: Option<String>,
}

/// Resolve a song to a playable YouTube Music URL
///
/// # Response
/// - 200 OK: `{url, title, artist}`
/// - 400 Bad Request: body missing, malformed, or a field is empty
/// - 404 Not Found: no results, or the chosen result has no video id
/// - 500 Internal Server Error: catalog unreachable or returned garbage
async fn search(
    State(state): State<SearchState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<PlayableResult>> {
    let Json(request) = payload?;
    let song_title = required_field(request.song_title, "song_title")?;
    let artist_name = required_field(request.artist_name, "artist_name")?;

    tracing::info!(song = %song_title, artist = %artist_name, "Song search requested");

    let result = state.catalog.resolve(&song_title, &artist_name).await?;

    Ok(Json(result))
}
