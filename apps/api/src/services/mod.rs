//! Business logic services for songbridge
//!
//! - [`AssistantService`]: prompts the text-generation server and parses its output
//! - [`extraction`]: regex parsers for play commands and song choices

pub mod assistant;
pub mod extraction;

pub use assistant::AssistantService;
pub use extraction::{parse_chat_reply, parse_song_choice, ParsedReply};
