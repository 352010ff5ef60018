//! # Pulse One-Shot Classification (`pulse ask`)
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Classifies a single message against a fresh conversation and prints the
//! classification followed by the assistant's reply. With `--json`, prints
//! both as one JSON document instead.
//!
//! ## Examples
//!
//! ```bash
//! pulse ask "I love Drake, any similar artists?"
//! pulse ask --json events in Miami?
//! ```
//!
use crate::chat::{classify, respond, update_context, ConversationState, ParsedMessage};
use crate::core::config;
use crate::core::error::{PulseError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use serde::Serialize;
use tracing::info;

/// # Ask Command Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Print the classification and reply as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct AskOutput {
    parsed: ParsedMessage,
    response: String,
}

/// # Handle Ask Command (`handle_ask`)
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let joined = args.message.join(" ");
    let text = joined.trim();
    if text.is_empty() {
        return Err(anyhow!(PulseError::EmptyMessage));
    }

    let cfg = config::load_config()?;

    let mut state = ConversationState::new();
    let parsed = classify(text);
    update_context(&mut state, &parsed);
    let response = respond(&parsed, &state);

    if args.json {
        let output = AskOutput { parsed, response };
        let json =
            serde_json::to_string_pretty(&output).context("Failed to serialize classification")?;
        println!("{}", json);
    } else {
        print!("{}", format_summary(&parsed));
        println!();
        println!("{}: {}", cfg.chat.bot_name, response);
    }
    Ok(())
}

fn format_summary(parsed: &ParsedMessage) -> String {
    fn list(values: &[String]) -> String {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    }

    format!(
        "Intent:    {}\nKeywords:  {}\nArtists:   {}\nGenres:    {}\nLocations: {}\nSentiment: {}\n",
        parsed.intent,
        list(&parsed.keywords),
        list(&parsed.entities.artists),
        list(&parsed.entities.genres),
        list(&parsed.entities.locations),
        parsed.sentiment
    )
}
