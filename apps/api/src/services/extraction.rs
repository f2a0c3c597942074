//! Pattern extraction from generated text
//!
//! Model output is free text, so both parsers are best effort and return
//! `None` rather than failing when the expected shape is missing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::PlayCommand;

/// `[PLAY]: <song> by <artist>` terminated by a period, newline or end of text
static PLAY_COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[PLAY\]:\s*(.+?)\s+by\s+(.+?)\s*(?:\.|\n|$)")
        .expect("play command pattern is valid")
});

/// `Song: <name> by <artist>`
static SONG_CHOICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Song:\s*(.*?)\s+by\s+(.*)").expect("song choice pattern is valid")
});

/// A chat reply split into display text and an optional play command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub reply: String,
    pub play_command: Option<PlayCommand>,
}

fn clean(value: &str) -> String {
    value.trim().trim_matches('"').trim().to_string()
}

/// Find an embedded play command and remove it from the displayed reply
///
/// When removing the command leaves nothing, the full text is kept as the
/// reply so the client always has something to show.
pub fn parse_chat_reply(text: &str) -> ParsedReply {
    let Some(captures) = PLAY_COMMAND_RE.captures(text) else {
        return ParsedReply {
            reply: text.to_string(),
            play_command: None,
        };
    };

    let song = clean(&captures[1]);
    let artist = clean(&captures[2]);
    if song.is_empty() || artist.is_empty() {
        return ParsedReply {
            reply: text.to_string(),
            play_command: None,
        };
    }

    let span = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
    let before = text[..span.start].trim();
    let after = text[span.end..].trim();
    let remainder = match (before.is_empty(), after.is_empty()) {
        (true, true) => String::new(),
        (false, true) => before.to_string(),
        (true, false) => after.to_string(),
        (false, false) => format!("{} {}", before, after),
    };

    ParsedReply {
        reply: if remainder.is_empty() {
            text.to_string()
        } else {
            remainder
        },
        play_command: Some(PlayCommand::new(song, artist)),
    }
}

/// Extract the `Song: <name> by <artist>` answer
pub fn parse_song_choice(text: &str) -> Option<PlayCommand> {
    let captures = SONG_CHOICE_RE.captures(text)?;

    let song = clean(&captures[1]);
    let artist = clean(captures[2].trim_end().trim_end_matches('.'));
    if song.is_empty() || artist.is_empty() {
        return None;
    }

    Some(PlayCommand::new(song, artist))
}
