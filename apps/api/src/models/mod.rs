//! Domain models shared by routes and services

pub mod chat;

pub use chat::{ChatHistory, ChatTurn, PlayCommand};
