//! Request and response types for the `/api/v1/generate` endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sampling configuration sent with every generation request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SamplingParams {
    /// Context window in tokens
    pub max_context_length: u32,
    /// Repetition penalty
    pub rep_pen: f64,
    /// Number of trailing tokens the repetition penalty looks at
    pub rep_pen_range: u32,
    /// Repetition penalty slope
    pub rep_pen_slope: f64,
    pub temperature: f64,
    pub top_p: f64,
    /// Typical sampling (1 disables it)
    pub typical: f64,
    /// Generation stops at the first of these sequences
    pub stop_sequence: Vec<String>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            max_context_length: 2048,
            rep_pen: 1.02,
            rep_pen_range: 256,
            rep_pen_slope: 1.0,
            temperature: 0.5,
            top_p: 0.9,
            typical: 1.0,
            stop_sequence: vec!["<|user|>".to_string(), "Human:".to_string()],
        }
    }
}

/// Request body for text generation
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Full prompt text
    pub prompt: String,
    /// Maximum number of tokens to generate
    pub max_length: u32,
    #[serde(flatten)]
    pub sampling: SamplingParams,
}

/// Response from the generation endpoint
///
/// KoboldCpp answers with `{"results": [{"text": ...}]}`; some compatible
/// servers return a bare `{"text": ...}` instead. Both fields are kept as raw
/// JSON so an unexpected shape in one never hides the other.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub results: Option<Value>,
    #[serde(default)]
    pub text: Option<Value>,
}

impl GenerateResponse {
    /// Pick the generated text
    ///
    /// `results[0].text` when `results` is a non-empty list of objects,
    /// otherwise the top-level `text`, otherwise empty.
    pub fn into_text(self) -> String {
        let first_result = self
            .results
            .as_ref()
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .filter(|first| first.is_object());

        let text = match first_result {
            Some(first) => first.get("text"),
            None => self.text.as_ref(),
        };

        text.and_then(Value::as_str).unwrap_or_default().to_string()
    }
}
