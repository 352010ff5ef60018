//! # Pulse Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout Pulse. The chat
//! pipeline itself cannot fail on any input string: unmatched text degrades
//! to the `general` intent. Errors only arise at the edges of the system,
//! such as configuration loading, terminal I/O, and input validation at the
//! send boundary.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PulseError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use pulse::core::error::{PulseError, Result};
//!
//! fn check(input: &str) -> Result<&str> {
//!     let trimmed = input.trim();
//!     if trimmed.is_empty() {
//!         return Err(PulseError::EmptyMessage.into());
//!     }
//!     Ok(trimmed)
//! }
//!
//! assert!(check("   ").is_err());
//! ```
//!
use thiserror::Error;

/// Custom error type for the Pulse application.
#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message cannot be empty.")]
    EmptyMessage,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Bot reply task failed: {0}")]
    ReplyTask(String),

    #[error("Conversation state is unavailable: a previous update panicked.")]
    StatePoisoned,
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = PulseError::Config("bot_name cannot be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: bot_name cannot be empty"
        );

        assert_eq!(
            PulseError::EmptyMessage.to_string(),
            "Message cannot be empty."
        );
        assert_eq!(
            PulseError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = PulseError::PasswordMismatch.into();
        assert!(matches!(
            err.downcast_ref::<PulseError>(),
            Some(PulseError::PasswordMismatch)
        ));
    }
}
