//! # Chat Data Model
//!
//! File: cli/src/chat/types.rs
//!
//! ## Overview
//!
//! Plain data types shared by the classifier, the context tracker, the
//! responder, and the session layer. `ParsedMessage` serializes with
//! lowercase labels so `pulse ask --json` prints the same vocabulary the
//! classifier matches against.
//!
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Coarse category assigned to a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Music,
    Events,
    Matchmaking,
    Profile,
    Help,
    Greeting,
    Goodbye,
    /// Fallback when no trigger substring matches.
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Music => "music",
            Intent::Events => "events",
            Intent::Matchmaking => "matchmaking",
            Intent::Profile => "profile",
            Intent::Help => "help",
            Intent::Greeting => "greeting",
            Intent::Goodbye => "goodbye",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        })
    }
}

/// Named values recognised in a message. Every entry is drawn from the
/// static vocabularies in `chat::vocabulary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entities {
    pub artists: Vec<String>,
    pub genres: Vec<String>,
    pub locations: Vec<String>,
}

/// Result of classifying one user message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    /// The message as the user typed it (after trimming).
    pub original: String,
    pub intent: Intent,
    /// Every trigger substring found, in intent-table order.
    pub keywords: Vec<String>,
    pub entities: Entities,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One rendered line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Local::now(),
        }
    }
}
