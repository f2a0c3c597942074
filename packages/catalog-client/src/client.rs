//! YouTube Music search client implementation

use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use songbridge_shared_config::CatalogConfig;
use tracing::{debug, instrument};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    parse_search_response, CandidateTrack, ClientInfo, PlayableResult, RequestContext,
    SearchRequest,
};
use crate::selection::{into_playable, select_candidate};

/// Web client identity expected by the music.youtube.com API
const CLIENT_NAME: &str = "WEB_REMIX";
const CLIENT_VERSION: &str = "1.20240101.01.00";

/// Search params restricting results to the "songs" shelf
const SONGS_FILTER_PARAMS: &str = "EgWKAQIIAWoMEA4QChADEAQQCRAF";

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum error body size kept in error messages
const MAX_ERROR_BODY_SIZE: usize = 500;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";

/// Catalog search client
#[derive(Clone)]
pub struct CatalogClient {
    http_client: Client,
    config: CatalogConfig,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("url", &self.config.url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(
                DEFAULT_CONNECT_TIMEOUT_SECS.min(config.timeout_secs),
            ))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn validate_query(query: &str) -> CatalogResult<&str> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidInput(
                "search query cannot be empty".to_string(),
            ));
        }
        Ok(trimmed)
    }

    fn map_send_error(&self, e: reqwest::Error) -> CatalogError {
        if e.is_timeout() {
            CatalogError::Timeout(self.config.timeout_secs)
        } else {
            CatalogError::Http(e)
        }
    }

    /// Search the catalog for songs matching `query`, in catalog order
    #[instrument(skip(self))]
    pub async fn search_songs(&self, query: &str) -> CatalogResult<Vec<CandidateTrack>> {
        let query = Self::validate_query(query)?;

        let request = SearchRequest {
            context: RequestContext {
                client: ClientInfo {
                    client_name: CLIENT_NAME,
                    client_version: CLIENT_VERSION,
                    hl: &self.config.language,
                },
                user: serde_json::Map::new(),
            },
            query,
            params: SONGS_FILTER_PARAMS,
        };

        debug!(query = %query, "Searching catalog for songs");

        let response = self
            .http_client
            .post(self.config.search_url())
            .query(&[("alt", "json")])
            .header(reqwest::header::ORIGIN, self.config.url.trim_end_matches('/'))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message: String = text.chars().take(MAX_ERROR_BODY_SIZE).collect();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = serde_json::from_str(&text)?;
        let candidates = parse_search_response(&body);

        debug!(
            query = %query,
            result_count = candidates.len(),
            "Catalog search finished"
        );

        Ok(candidates)
    }

    /// Resolve a song title and artist name to a playable result
    ///
    /// # Errors
    /// - `CatalogError::NoResults` - the search returned no candidates
    /// - `CatalogError::MissingVideoId` - the chosen candidate has no id
    /// - `CatalogError::Http` / `Timeout` / `Api` / `Parse` - upstream failure
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        song_title: &str,
        artist_name: &str,
    ) -> CatalogResult<PlayableResult> {
        let query = format!("{} {}", song_title, artist_name);
        let candidates = self.search_songs(&query).await?;

        let chosen = select_candidate(&candidates, artist_name)
            .ok_or_else(|| CatalogError::NoResults(query.trim().to_string()))?;

        let result = into_playable(chosen)?;
        debug!(url = %result.url, title = %result.title, "Resolved song");

        Ok(result)
    }
}
