//! # Pulse Library Root
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! Public library interface of the `pulse` crate. The binary in `main.rs`
//! only parses arguments, sets up logging, and dispatches to `commands`;
//! everything else lives here so integration tests can use it directly.
//!
//! - `chat`: classifier, context tracking, responder, and chat session
//! - `auth`: mock login/signup form handling
//! - `commands`: CLI command handlers
//! - `core`: configuration and error types
//!
pub mod auth;
pub mod chat;
pub mod commands;
pub mod core;
