//! # Chat Session
//!
//! File: cli/src/chat/session.rs
//!
//! ## Overview
//!
//! `ChatSession` is the interface layer between an input widget and the
//! classifier. It owns the `ConversationState` and runs one full cycle per
//! send:
//! 1. Reject empty or whitespace-only input (no-op)
//! 2. Record and render the user message immediately
//! 3. Classify, update the context, and pick a response, in that order
//! 4. Schedule the bot message after the configured reply delay
//!
//! ## Reply Scheduling
//!
//! The bot message is delivered by a Tokio task that sleeps for the reply
//! delay, appends the message to the state, and hands it to the
//! `RenderSink`. `send` returns a `PendingReply` for that task. Callers that
//! need replies in send order must `wait()` on each one before the next
//! send; the session does not serialize overlapping replies itself, so two
//! sends in quick succession leave two timers racing for the state.
//!
//! ## Examples
//!
//! ```rust
//! use pulse::chat::{ChatMessage, ChatSession, RenderSink};
//! use std::{sync::Arc, time::Duration};
//!
//! struct Stdout;
//! impl RenderSink for Stdout {
//!     fn render(&self, message: &ChatMessage) {
//!         println!("{}", message.text);
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> pulse::core::error::Result<()> {
//! let session = ChatSession::new(Arc::new(Stdout), Duration::from_millis(0));
//! if let Some(pending) = session.send("hi there")? {
//!     pending.wait().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
use super::classifier::classify;
use super::context::{update_context, ConversationState};
use super::responder::respond;
use super::types::{ChatMessage, Sender};
use crate::core::error::{PulseError, Result};
use anyhow::anyhow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Output boundary: receives every chat message in emission order.
pub trait RenderSink: Send + Sync {
    fn render(&self, message: &ChatMessage);
}

pub struct ChatSession {
    state: Arc<Mutex<ConversationState>>,
    sink: Arc<dyn RenderSink>,
    reply_delay: Duration,
}

/// Handle to a scheduled bot reply.
#[derive(Debug)]
pub struct PendingReply {
    text: String,
    delivered: Arc<AtomicBool>,
    handle: JoinHandle<Result<()>>,
}

impl PendingReply {
    /// The text that will be delivered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Stops the reply from being delivered, if it has not been already.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// True once the reply has been recorded and handed to the sink.
    pub fn is_delivered(&self) -> bool {
        self.delivered.load(Ordering::SeqCst)
    }

    /// Waits until the reply has been recorded and rendered. A cancelled
    /// reply resolves immediately. Fails with `PulseError::StatePoisoned`
    /// if the reply could not be recorded.
    pub async fn wait(self) -> Result<()> {
        match self.handle.await {
            Ok(delivery) => delivery,
            Err(e) if e.is_cancelled() => {
                debug!("Bot reply was cancelled before delivery.");
                Ok(())
            }
            Err(e) => Err(anyhow!(PulseError::ReplyTask(e.to_string()))),
        }
    }
}

impl ChatSession {
    pub fn new(sink: Arc<dyn RenderSink>, reply_delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ConversationState::new())),
            sink,
            reply_delay,
        }
    }

    /// Handles one send action. Returns `Ok(None)` for blank input.
    ///
    /// Must be called from within a Tokio runtime, since the bot reply is
    /// scheduled with `tokio::spawn`.
    pub fn send(&self, raw: &str) -> Result<Option<PendingReply>> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("Ignoring empty message.");
            return Ok(None);
        }

        let user_message = ChatMessage::new(text, Sender::User);
        let reply = {
            let mut state = self.lock_state()?;
            state.record(user_message.clone());

            let parsed = classify(text);
            update_context(&mut state, &parsed);
            respond(&parsed, &state)
        };
        self.sink.render(&user_message);

        let delivered = Arc::new(AtomicBool::new(false));
        let handle = self.schedule_reply(reply.clone(), Arc::clone(&delivered));
        Ok(Some(PendingReply {
            text: reply,
            delivered,
            handle,
        }))
    }

    /// Returns a copy of the current conversation state.
    pub fn state(&self) -> Result<ConversationState> {
        Ok(self.lock_state()?.clone())
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, ConversationState>> {
        self.state
            .lock()
            .map_err(|_| anyhow!(PulseError::StatePoisoned))
    }

    fn schedule_reply(
        &self,
        reply: String,
        delivered: Arc<AtomicBool>,
    ) -> JoinHandle<Result<()>> {
        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        let delay = self.reply_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let message = ChatMessage::new(reply, Sender::Bot);
            match state.lock() {
                Ok(mut state) => state.record(message.clone()),
                Err(_) => {
                    warn!("Dropping bot reply: conversation state lock is poisoned.");
                    return Err(anyhow!(PulseError::StatePoisoned));
                }
            }
            sink.render(&message);
            delivered.store(true, Ordering::SeqCst);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::types::Intent;

    #[derive(Default)]
    struct RecordingSink {
        rendered: Mutex<Vec<ChatMessage>>,
    }

    impl RenderSink for RecordingSink {
        fn render(&self, message: &ChatMessage) {
            self.rendered.lock().unwrap().push(message.clone());
        }
    }

    impl RecordingSink {
        fn texts(&self) -> Vec<(Sender, String)> {
            self.rendered
                .lock()
                .unwrap()
                .iter()
                .map(|m| (m.sender, m.text.clone()))
                .collect()
        }
    }

    fn session_with_sink(delay_ms: u64) -> (ChatSession, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let session = ChatSession::new(sink.clone(), Duration::from_millis(delay_ms));
        (session, sink)
    }

    #[tokio::test]
    async fn test_blank_input_is_a_no_op() {
        let (session, sink) = session_with_sink(0);

        assert!(session.send("").unwrap().is_none());
        assert!(session.send("   \t ").unwrap().is_none());

        let state = session.state().unwrap();
        assert!(state.messages.is_empty());
        assert!(state.context.conversation_history.is_empty());
        assert!(sink.texts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bot_reply_arrives_after_delay() {
        let (session, sink) = session_with_sink(500);

        let pending = session.send("  hi there  ").unwrap().unwrap();
        assert_eq!(sink.texts(), vec![(Sender::User, "hi there".to_string())]);

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(sink.texts().len(), 1);
        assert!(!pending.is_delivered());

        let expected = pending.text().to_string();
        pending.wait().await.unwrap();

        assert_eq!(
            sink.texts(),
            vec![
                (Sender::User, "hi there".to_string()),
                (Sender::Bot, expected),
            ]
        );
        let state = session.state().unwrap();
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.context.current_topic, Some(Intent::Greeting));
        assert_eq!(state.context.conversation_history[0].original, "hi there");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_is_never_delivered() {
        let (session, sink) = session_with_sink(500);

        let pending = session.send("events in Miami?").unwrap().unwrap();
        pending.cancel();
        pending.wait().await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(sink.texts().len(), 1);
        let state = session.state().unwrap();
        assert_eq!(state.messages.len(), 1);
        // The context was still updated at send time.
        assert_eq!(state.context.current_topic, Some(Intent::Events));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_reply_is_not_reported_delivered() {
        let (session, _sink) = session_with_sink(500);

        let pending = session.send("hi").unwrap().unwrap();
        pending.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert!(!pending.is_delivered());
        let state = session.state().unwrap();
        let bot_messages = state
            .messages
            .iter()
            .filter(|m| m.sender == Sender::Bot)
            .count();
        assert_eq!(bot_messages, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_reports_poisoned_state() {
        let (session, sink) = session_with_sink(500);

        let pending = session.send("hi").unwrap().unwrap();
        let state = Arc::clone(&session.state);
        let _ = std::thread::spawn(move || {
            let _guard = state.lock().unwrap();
            panic!("poison the conversation state");
        })
        .join();

        let err = pending.wait().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PulseError>(),
            Some(PulseError::StatePoisoned)
        ));
        assert_eq!(sink.texts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_sends_both_deliver() {
        let (session, sink) = session_with_sink(500);

        let first = session.send("new music please").unwrap().unwrap();
        let second = session.send("bye").unwrap().unwrap();
        first.wait().await.unwrap();
        second.wait().await.unwrap();

        let senders: Vec<Sender> = sink.texts().into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::User, Sender::Bot, Sender::Bot]
        );
        let state = session.state().unwrap();
        assert_eq!(state.messages.len(), 4);
        assert_eq!(state.context.conversation_history.len(), 2);
        assert_eq!(state.context.current_topic, Some(Intent::Goodbye));
    }

    #[tokio::test]
    async fn test_general_reply_names_general() {
        let (session, _sink) = session_with_sink(0);

        session.send("new music please").unwrap().unwrap().wait().await.unwrap();
        let pending = session.send("asdf qwerty").unwrap().unwrap();
        assert!(pending
            .text()
            .contains("Are you still asking about general?"));
        pending.wait().await.unwrap();
    }
}
