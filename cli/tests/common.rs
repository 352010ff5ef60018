//! # Pulse CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Every command built here
//! runs inside an isolated temporary directory so that neither the
//! developer's user config nor a stray `.pulse.toml` leaks into the tests.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// An isolated working directory. The `.git` marker stops the project
/// config search from walking above it.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox dir");
        fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        fs::create_dir(dir.path().join("home")).expect("Failed to create fake home");
        Self { dir }
    }

    /// Writes a `.pulse.toml` into the sandbox root.
    pub fn with_project_config(self, toml: &str) -> Self {
        fs::write(self.dir.path().join(".pulse.toml"), toml).expect("Failed to write config");
        self
    }

    /// A `pulse` command running in the sandbox with a fake home directory.
    pub fn pulse_cmd(&self) -> Command {
        let home = self.dir.path().join("home");
        let mut cmd = pulse_cmd();
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("RUST_LOG")
            .env_remove("PULSE_REPLY_DELAY_MS");
        cmd
    }
}

/// # Get Pulse Command (`pulse_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `pulse` binary.
pub fn pulse_cmd() -> Command {
    Command::cargo_bin("pulse").expect("Failed to find pulse binary for testing")
}
