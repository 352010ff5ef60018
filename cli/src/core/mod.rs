//! # Pulse Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the chat pipeline and
//! the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use pulse::core::config; // For loading configuration
//! use pulse::core::error::{PulseError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
