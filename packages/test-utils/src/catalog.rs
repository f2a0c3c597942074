//! Mock YouTube Music search server
//!
//! Renders [`SongFixture`]s into the renderer tree the real search endpoint
//! returns, so the catalog client's parser is exercised end to end.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/youtubei/v1/search";

/// A song as it should appear in a mocked search result
#[derive(Debug, Clone)]
pub struct SongFixture {
    pub video_id: Option<String>,
    pub title: String,
    pub artists: Vec<String>,
}

impl SongFixture {
    pub fn new(video_id: &str, title: &str, artists: &[&str]) -> Self {
        Self {
            video_id: Some(video_id.to_string()),
            title: title.to_string(),
            artists: artists.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// A song whose renderer carries no video id
    pub fn without_video_id(title: &str, artists: &[&str]) -> Self {
        Self {
            video_id: None,
            ..Self::new("", title, artists)
        }
    }

    fn to_renderer(&self, index: usize) -> Value {
        let mut artist_runs = Vec::new();
        for (i, artist) in self.artists.iter().enumerate() {
            if i > 0 {
                artist_runs.push(json!({"text": " & "}));
            }
            artist_runs.push(json!({
                "text": artist,
                "navigationEndpoint": {"browseEndpoint": {
                    "browseId": format!("UCfixture{}x{}", index, i),
                    "browseEndpointContextSupportedConfigs": {
                        "browseEndpointContextMusicConfig": {"pageType": "MUSIC_PAGE_TYPE_ARTIST"}
                    }
                }}
            }));
        }
        artist_runs.push(json!({"text": " • "}));
        artist_runs.push(json!({"text": "3:30"}));

        let mut renderer = json!({
            "flexColumns": [
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": [{"text": self.title}]}}},
                {"musicResponsiveListItemFlexColumnRenderer": {"text": {"runs": artist_runs}}}
            ]
        });
        if let Some(id) = &self.video_id {
            renderer["playlistItemData"] = json!({"videoId": id});
        }

        json!({"musicResponsiveListItemRenderer": renderer})
    }
}

/// Build a full search response body for the given songs
pub fn search_response(songs: &[SongFixture]) -> Value {
    let items: Vec<Value> = songs
        .iter()
        .enumerate()
        .map(|(i, song)| song.to_renderer(i))
        .collect();

    json!({
        "contents": {"tabbedSearchResultsRenderer": {"tabs": [{"tabRenderer": {"content": {
            "sectionListRenderer": {"contents": [{"musicShelfRenderer": {"contents": items}}]}
        }}}]}}
    })
}

/// Mock catalog search server
pub struct MockCatalogServer {
    server: MockServer,
}

impl MockCatalogServer {
    /// Start a new mock catalog server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a search response listing `songs` in order
    pub async fn mock_songs(&self, songs: &[SongFixture]) {
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_response(songs)))
            .mount(&self.server)
            .await;
    }

    /// Mount a search response with no results
    pub async fn mock_no_results(&self) {
        self.mock_songs(&[]).await;
    }

    /// Mount a search failure with the given status
    pub async fn mock_failure(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("upstream failure"))
            .mount(&self.server)
            .await;
    }

    /// Mount a search response delayed by `delay_ms`
    pub async fn mock_timeout(&self, delay_ms: u64) {
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_millis(delay_ms))
                    .set_body_json(search_response(&[])),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of search requests received so far
    pub async fn search_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}
