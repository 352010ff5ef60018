//! # Pulse Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading, merging, and validation for
//! Pulse. Only presentation and pacing of the chat are configurable; the
//! vocabularies and the size of the conversation history window are fixed.
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--delay-ms`, or `PULSE_REPLY_DELAY_MS`), applied by the caller
//! 2. Project-specific `.pulse.toml` in the current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [chat]
//! bot_name = "Pulse"
//! user_label = "You"
//! reply_delay_ms = 500
//! time_format = "%H:%M"
//! ```
//!
//! ```rust,no_run
//! # fn main() -> pulse::core::error::Result<()> {
//! let cfg = pulse::core::config::load_config()?;
//! println!("Bot replies after {:?}", cfg.chat.reply_delay());
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{PulseError, Result};
use anyhow::{anyhow, Context};
use chrono::format::{Item, StrftimeItems};
use directories::ProjectDirs;
use serde::Deserialize;
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Upper bound accepted for `chat.reply_delay_ms`.
pub const MAX_REPLY_DELAY_MS: u64 = 10_000;

const PROJECT_CONFIG_FILENAME: &str = ".pulse.toml";

/// The effective configuration after all sources have been merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub chat: ChatConfig,
}

/// Settings for the chat session and its terminal rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Label shown next to bot messages.
    pub bot_name: String,
    /// Label shown next to user messages.
    pub user_label: String,
    /// Simulated typing delay before the bot message is delivered.
    pub reply_delay_ms: u64,
    /// `chrono` format string for rendered timestamps.
    pub time_format: String,
}

/// # Configuration from File (`FileConfig`)
///
/// What a single TOML file sets. Keys left out of the file stay `None`, so
/// a file that spells out a default value still overrides the layer below.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    chat: FileChatConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct FileChatConfig {
    bot_name: Option<String>,
    user_label: Option<String>,
    reply_delay_ms: Option<u64>,
    time_format: Option<String>,
}

impl FileChatConfig {
    fn apply_to(self, chat: &mut ChatConfig) {
        if let Some(bot_name) = self.bot_name {
            chat.bot_name = bot_name;
        }
        if let Some(user_label) = self.user_label {
            chat.user_label = user_label;
        }
        if let Some(reply_delay_ms) = self.reply_delay_ms {
            chat.reply_delay_ms = reply_delay_ms;
        }
        if let Some(time_format) = self.time_format {
            chat.time_format = time_format;
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            user_label: default_user_label(),
            reply_delay_ms: default_reply_delay_ms(),
            time_format: default_time_format(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

fn default_bot_name() -> String {
    "Pulse".to_string()
}
fn default_user_label() -> String {
    "You".to_string()
}
fn default_reply_delay_ms() -> u64 {
    500
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config, project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Pulse", "pulse") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<FileConfig>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.pulse.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.pulse.toml`, stopping at the first
/// directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Layers defaults, then the user file, then the project file.
fn merge_configs(user: Option<FileConfig>, project: Option<FileConfig>) -> Config {
    let mut merged = Config::default();
    for layer in [user, project].into_iter().flatten() {
        layer.chat.apply_to(&mut merged.chat);
    }
    merged
}

pub fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    let chat = &config.chat;
    if chat.bot_name.trim().is_empty() {
        return Err(anyhow!(PulseError::Config(
            "chat.bot_name cannot be empty.".to_string()
        )));
    }
    if chat.user_label.trim().is_empty() {
        return Err(anyhow!(PulseError::Config(
            "chat.user_label cannot be empty.".to_string()
        )));
    }
    if chat.time_format.is_empty() {
        return Err(anyhow!(PulseError::Config(
            "chat.time_format cannot be empty.".to_string()
        )));
    }
    if StrftimeItems::new(&chat.time_format).any(|item| item == Item::Error) {
        return Err(anyhow!(PulseError::Config(format!(
            "chat.time_format '{}' is not a valid strftime format.",
            chat.time_format
        ))));
    }
    if chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
        return Err(anyhow!(PulseError::Config(format!(
            "chat.reply_delay_ms must be at most {} (got {}).",
            MAX_REPLY_DELAY_MS, chat.reply_delay_ms
        ))));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
