//! Chat-related models

use serde::{Deserialize, Serialize};

/// A song/artist pair pulled out of generated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCommand {
    pub song: String,
    pub artist: String,
}

impl PlayCommand {
    pub fn new(song: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            song: song.into(),
            artist: artist.into(),
        }
    }
}

/// One turn of a client-side conversation
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    /// Who spoke ("user", "assistant", ...)
    #[serde(default, alias = "sender")]
    pub role: String,
    #[serde(alias = "text", alias = "message")]
    pub content: String,
}

/// Conversation transcript sent by the client
///
/// Accepts a pre-rendered transcript string or a list of turns.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChatHistory {
    Transcript(String),
    Turns(Vec<ChatTurn>),
}

impl ChatHistory {
    /// True when there is no conversation text at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Transcript(text) => text.trim().is_empty(),
            Self::Turns(turns) => turns.iter().all(|t| t.content.trim().is_empty()),
        }
    }

    /// Render as one `Speaker: text` line per turn
    pub fn to_transcript(&self) -> String {
        match self {
            Self::Transcript(text) => text.trim().to_string(),
            Self::Turns(turns) => turns
                .iter()
                .filter(|t| !t.content.trim().is_empty())
                .map(|t| format!("{}: {}", speaker_label(&t.role), t.content.trim()))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn speaker_label(role: &str) -> String {
    let role = role.trim();
    if role.is_empty() {
        return "User".to_string();
    }

    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "User".to_string(),
    }
}
