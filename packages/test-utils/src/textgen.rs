//! Mock text-generation server
//!
//! Provides a [`MockTextGenServer`] that answers `/api/v1/generate` the way
//! KoboldCpp does, for testing prompt handling and output parsing without a
//! real model.

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/api/v1/generate";

/// Mock text-generation server
///
/// # Example
///
/// ```rust,ignore
/// use songbridge_test_utils::MockTextGenServer;
///
/// #[tokio::test]
/// async fn test_generation() {
///     let server = MockTextGenServer::start().await;
///     server.mock_generate_success("Song: Midnight by The Band").await;
///
///     // Configure your client with server.url()
/// }
/// ```
pub struct MockTextGenServer {
    server: MockServer,
}

impl MockTextGenServer {
    /// Start a new mock text-generation server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a successful generation in the `{"results": [{"text"}]}` shape
    pub async fn mock_generate_success(&self, text: &str) {
        self.mock_generate_with_json(json!({"results": [{"text": text}]}))
            .await;
    }

    /// Mount a successful generation in the bare `{"text"}` shape
    pub async fn mock_generate_top_level_text(&self, text: &str) {
        self.mock_generate_with_json(json!({"text": text})).await;
    }

    /// Mount a generation answer with a custom body
    pub async fn mock_generate_with_json(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mount a generation failure
    pub async fn mock_generate_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(status_code).set_body_json(json!({
                    "error": error_message
                })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a successful generation answered only after `delay_ms`
    pub async fn mock_generate_delayed(&self, text: &str, delay_ms: u64) {
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(std::time::Duration::from_millis(delay_ms))
                    .set_body_json(json!({"results": [{"text": text}]})),
            )
            .mount(&self.server)
            .await;
    }

    /// Bodies of all generation requests received so far
    pub async fn received_prompts(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| serde_json::from_slice::<Value>(&request.body).ok())
            .filter_map(|body| body["prompt"].as_str().map(str::to_string))
            .collect()
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}
