//! Assistant route handlers
//!
//! - `POST /chat` - Chat with the music assistant; may carry a play command
//! - `POST /play_ai` - Pick a song to play from a conversation transcript

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult};
use crate::models::{ChatHistory, PlayCommand};
use crate::routes::required_field;
use crate::services::AssistantService;

/// Shared state for assistant handlers
#[derive(Clone)]
pub struct AssistantState {
    pub assistant: Arc<AssistantService>,
}

impl AssistantState {
    pub fn new(assistant: AssistantService) -> Self {
        Self {
            assistant: Arc::new(assistant),
        }
    }
}

/// Create the assistant router
pub fn assistant_router(state: AssistantState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/play_ai", post(play_ai))
        .with_state(state)
}

// ========== Request/Response Types ==========

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_command: Option<PlayCommand>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlayAiRequest {
    pub chat_history: Option<ChatHistory>,
}

// ========== Route Handlers ==========

/// Chat with the assistant
///
/// # Response
/// - 200 OK: `{reply}` or `{reply, play_command: {song, artist}}`
/// - 400 Bad Request: missing or empty `message`
async fn chat(
    State(state): State<AssistantState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(request) = payload?;
    let message = required_field(request.message, "message")?;

    tracing::info!(message_len = message.len(), "Chat message received");

    let parsed = state.assistant.chat(&message).await;

    Ok(Json(ChatResponse {
        reply: parsed.reply,
        play_command: parsed.play_command,
    }))
}

/// Let the assistant choose a song from the conversation so far
///
/// # Response
/// - 200 OK: `{song, artist}`
/// - 400 Bad Request: missing history, or no `Song: ... by ...` in the output
async fn play_ai(
    State(state): State<AssistantState>,
    payload: Result<Json<PlayAiRequest>, JsonRejection>,
) -> ApiResult<Json<PlayCommand>> {
    let Json(request) = payload?;
    let history = request
        .chat_history
        .filter(|history| !history.is_empty())
        .ok_or(ApiError::MissingField("chat_history"))?;

    tracing::info!("Song pick requested from chat history");

    let choice = state
        .assistant
        .pick_song(&history)
        .await
        .ok_or(ApiError::ExtractionFailed("song and artist"))?;

    Ok(Json(choice))
}
