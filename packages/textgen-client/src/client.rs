//! HTTP client for the text-generation server

use std::time::Duration;

use reqwest::Client;
use songbridge_shared_config::TextGenConfig;
use tracing::{debug, instrument, warn};

use crate::error::{TextGenError, TextGenResult};
use crate::models::{GenerateRequest, GenerateResponse, SamplingParams};

/// Maximum error body size to prevent memory exhaustion
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Text-generation client with a pooled HTTP connection
#[derive(Debug, Clone)]
pub struct TextGenClient {
    http_client: Client,
    config: TextGenConfig,
    sampling: SamplingParams,
}

impl TextGenClient {
    /// Create a new client from configuration
    pub fn new(config: &TextGenConfig) -> TextGenResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(TextGenError::HttpError)?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a client with custom HTTP client (for testing)
    pub fn with_client(config: &TextGenConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config: config.clone(),
            sampling: SamplingParams::default(),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &TextGenConfig {
        &self.config
    }

    /// Get the sampling parameters sent with every request
    pub fn sampling(&self) -> &SamplingParams {
        &self.sampling
    }

    /// Truncate error body to prevent memory exhaustion
    /// Safely handles UTF-8 boundaries to avoid panics on multi-byte characters
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }

    /// Generate text, surfacing any failure
    ///
    /// `max_length` falls back to the configured default when `None`.
    pub async fn try_generate(
        &self,
        prompt: &str,
        max_length: Option<u32>,
    ) -> TextGenResult<String> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
            max_length: max_length.unwrap_or(self.config.max_length),
            sampling: self.sampling.clone(),
        };

        debug!(
            prompt_len = request.prompt.len(),
            max_length = request.max_length,
            "Generating text"
        );

        let response = self
            .http_client
            .post(self.config.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    TextGenError::ConnectionRefused(self.config.url.clone())
                } else if e.is_timeout() {
                    TextGenError::Timeout(self.config.timeout_secs)
                } else {
                    TextGenError::HttpError(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());
            return Err(TextGenError::ApiError(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TextGenError::Timeout(self.config.timeout_secs)
            } else {
                TextGenError::HttpError(e)
            }
        })?;
        let generated: GenerateResponse = serde_json::from_str(&body)?;
        let text = generated.into_text();

        debug!(response_len = text.len(), "Text generated");

        Ok(text)
    }

    /// Generate text, degrading to an empty string on any failure
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str, max_length: Option<u32>) -> String {
        match self.try_generate(prompt, max_length).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Text generation failed, returning empty text");
                String::new()
            }
        }
    }
}
