//! # Conversation Context
//!
//! File: cli/src/chat/context.rs
//!
//! ## Overview
//!
//! `ConversationState` is the in-memory record of one chat session: the
//! full message log plus a rolling window of the most recent classified
//! messages. It lives as long as the session that owns it and is never
//! persisted.
//!
//! `update_context` must run once per classified message, after
//! classification and before response generation. The responder reads
//! `current_topic`, so it always sees the topic that was just set.
//!
use super::types::{ChatMessage, Intent, ParsedMessage};
use std::collections::{HashMap, VecDeque};

/// Maximum number of parsed messages kept in `conversation_history`.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    /// Append-only log of everything rendered, user and bot.
    pub messages: Vec<ChatMessage>,
    pub context: ConversationContext,
}

#[derive(Debug, Clone, Default)]
pub struct ConversationContext {
    /// Intent of the most recently classified message.
    pub current_topic: Option<Intent>,
    /// The last `HISTORY_LIMIT` parsed messages, oldest first.
    pub conversation_history: VecDeque<ParsedMessage>,
    /// Reserved. Nothing writes to it yet.
    pub user_preferences: HashMap<String, String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// Sets the current topic and pushes `parsed` into the history window,
/// evicting the oldest entry once the window holds more than `HISTORY_LIMIT`.
pub fn update_context(state: &mut ConversationState, parsed: &ParsedMessage) {
    let context = &mut state.context;
    context.current_topic = Some(parsed.intent);
    context.conversation_history.push_back(parsed.clone());

    while context.conversation_history.len() > HISTORY_LIMIT {
        context.conversation_history.pop_front();
    }
}
