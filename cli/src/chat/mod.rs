//! # Pulse Chat Pipeline
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The rule-based chat assistant. A message flows through:
//! 1. `classifier`: intent, keywords, entities, and sentiment by substring matching
//! 2. `context`: updates the current topic and the rolling history window
//! 3. `responder`: selects the canned reply
//!
//! `session` wires the three together behind a send action and delivers the
//! reply to a `RenderSink` after a simulated typing delay. `vocabulary`
//! holds the word lists and `types` the shared data model.
//!
pub mod classifier;
pub mod context;
pub mod responder;
pub mod session;
pub mod types;
pub mod vocabulary;

pub use classifier::classify;
pub use context::{update_context, ConversationContext, ConversationState, HISTORY_LIMIT};
pub use responder::respond;
pub use session::{ChatSession, PendingReply, RenderSink};
pub use types::{ChatMessage, Entities, Intent, ParsedMessage, Sender, Sentiment};
