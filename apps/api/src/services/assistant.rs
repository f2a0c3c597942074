//! Chat assistant built on the local text-generation server
//!
//! Wraps [`TextGenClient`] with the two fixed prompts the API uses and the
//! extraction of play commands from the model output.

use songbridge_textgen_client::TextGenClient;
use tracing::{debug, instrument};

use crate::models::{ChatHistory, PlayCommand};
use crate::services::extraction::{parse_chat_reply, parse_song_choice, ParsedReply};

const CHAT_SYSTEM_PROMPT: &str = "You are a friendly music assistant. Talk with the user about \
music and recommend songs. When the user asks you to play a song, or you want to play one for \
them, include exactly one line of the form [PLAY]: <song> by <artist>.";

const PICK_SYSTEM_PROMPT: &str = "You choose the next song to play based on a conversation \
between a user and a music assistant. Answer only in the form: Song: <name> by <artist>";

/// Music chat assistant
#[derive(Debug, Clone)]
pub struct AssistantService {
    textgen: TextGenClient,
}

impl AssistantService {
    pub fn new(textgen: TextGenClient) -> Self {
        Self { textgen }
    }

    /// Prompt for a single chat turn
    pub fn chat_prompt(message: &str) -> String {
        format!(
            "<|system|>\n{}\n<|user|>\n{}\n<|assistant|>\n",
            CHAT_SYSTEM_PROMPT,
            message.trim()
        )
    }

    /// Prompt asking for one song based on the whole conversation
    pub fn pick_song_prompt(history: &ChatHistory) -> String {
        format!(
            "<|system|>\n{}\n<|user|>\nConversation:\n{}\n\nWhich song should be played now? \
             Answer only in the form: Song: <name> by <artist>\n<|assistant|>\n",
            PICK_SYSTEM_PROMPT,
            history.to_transcript()
        )
    }

    /// Answer a chat message, pulling out any play command the model emitted
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn chat(&self, message: &str) -> ParsedReply {
        let text = self
            .textgen
            .generate(&Self::chat_prompt(message), None)
            .await;
        let parsed = parse_chat_reply(&text);

        debug!(
            reply_len = parsed.reply.len(),
            has_play_command = parsed.play_command.is_some(),
            "Chat reply generated"
        );

        parsed
    }

    /// Ask the model which song to play for a conversation
    ///
    /// `None` when the output does not contain a `Song: ... by ...` answer,
    /// which includes the case where generation failed and produced no text.
    #[instrument(skip(self, history))]
    pub async fn pick_song(&self, history: &ChatHistory) -> Option<PlayCommand> {
        let text = self
            .textgen
            .generate(&Self::pick_song_prompt(history), None)
            .await;
        let choice = parse_song_choice(&text);

        debug!(
            output_len = text.len(),
            matched = choice.is_some(),
            "Song choice generated"
        );

        choice
    }
}
