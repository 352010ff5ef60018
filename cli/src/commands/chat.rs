//! # Pulse Interactive Chat (`pulse chat`)
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Runs a line-oriented chat with the assistant over stdin/stdout. The
//! terminal plays the role of the chat widget: each line read is one send
//! action, and bot replies are printed by `TerminalSink` once their typing
//! delay has elapsed.
//!
//! The loop waits for each reply before reading the next line, so replies
//! always print in the order the messages were sent.
//!
//! ## Examples
//!
//! ```bash
//! # Chat with the default half-second typing delay
//! pulse chat
//!
//! # No delay, handy when piping input
//! echo "events in Miami?" | pulse chat --delay-ms 0
//! ```
//!
use crate::chat::{ChatMessage, ChatSession, RenderSink, Sender};
use crate::core::config::{self, ChatConfig};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Line that ends the chat without waiting for EOF.
const QUIT_COMMAND: &str = "/quit";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Delay in milliseconds before each bot reply is shown.
    /// Overrides `chat.reply_delay_ms` from the config files.
    #[arg(long, env = "PULSE_REPLY_DELAY_MS")]
    pub delay_ms: Option<u64>,
}

/// Renders bot messages to stdout. User messages are not reprinted; the
/// terminal already shows what was typed.
pub struct TerminalSink {
    bot_name: String,
    time_format: String,
}

impl TerminalSink {
    pub fn new(chat: &ChatConfig) -> Self {
        Self {
            bot_name: chat.bot_name.clone(),
            time_format: chat.time_format.clone(),
        }
    }

    fn format_line(&self, message: &ChatMessage) -> String {
        format!(
            "{} [{}]: {}",
            self.bot_name,
            message.timestamp.format(&self.time_format),
            message.text
        )
    }
}

impl RenderSink for TerminalSink {
    fn render(&self, message: &ChatMessage) {
        if message.sender == Sender::Bot {
            println!("{}", self.format_line(message));
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads the configuration, applies the `--delay-ms` override, and runs the
/// chat loop on stdin until `/quit` or end of input.
pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let mut cfg = config::load_config()?;
    if let Some(delay_ms) = args.delay_ms {
        cfg.chat.reply_delay_ms = delay_ms;
        config::validate_config(&cfg).context("Invalid --delay-ms value")?;
    }

    let sink = Arc::new(TerminalSink::new(&cfg.chat));
    let session = ChatSession::new(sink, cfg.chat.reply_delay());

    println!(
        "Chat with {}! Ask about music, events, matchmaking, or your profile. Type '{}' to quit.",
        cfg.chat.bot_name, QUIT_COMMAND
    );

    let reader = BufReader::new(tokio::io::stdin());
    run_chat_loop(&session, reader, &cfg.chat.user_label).await
}

async fn run_chat_loop<R>(session: &ChatSession, reader: R, user_label: &str) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    loop {
        print!("{}: ", user_label);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let line = match lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        {
            Some(line) => line,
            None => {
                debug!("Reached end of input.");
                println!();
                break;
            }
        };

        if line.trim() == QUIT_COMMAND {
            break;
        }

        if let Some(pending) = session.send(&line)? {
            pending.wait().await?;
        }
    }
    Ok(())
}
