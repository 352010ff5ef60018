//! # Pulse Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the `pulse` CLI. Each
//! command defines its own Clap arguments struct and an async handler that
//! `main.rs` dispatches to.
//!
//! ## Commands
//!
//! - `chat`: Interactive chat with the assistant over stdin/stdout
//! - `ask`: Classify one message and print the reply
//! - `auth`: Submit the mock login/signup form
//!

/// Interactive chat session. Holds the terminal render sink.
pub mod chat;
/// One-shot classification, with optional JSON output.
pub mod ask;
/// Mock login and signup submissions.
pub mod auth;
