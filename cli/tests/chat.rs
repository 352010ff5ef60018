//! # Pulse CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//!
//! ## Overview
//!
//! Drives `pulse chat` with piped stdin. The reply delay is set to zero so
//! the tests do not sleep.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_chat_replies_to_each_line() {
    Sandbox::new()
        .pulse_cmd()
        .args(["chat", "--delay-ms", "0"])
        .write_stdin("hi there\nevents in Miami?\n/quit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Chat with Pulse!")
                .and(predicate::str::contains("Pulse ["))
                .and(predicate::str::contains("Hello! How can I help you today?"))
                .and(predicate::str::contains("find events in miami.")),
        );
}

#[test]
fn test_chat_delay_from_environment() {
    Sandbox::new()
        .pulse_cmd()
        .arg("chat")
        .env("PULSE_REPLY_DELAY_MS", "0")
        .write_stdin("bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thanks for chatting!"));
}

#[test]
fn test_chat_stops_at_quit() {
    Sandbox::new()
        .pulse_cmd()
        .args(["chat", "--delay-ms", "0"])
        .write_stdin("/quit\nhi there\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! How can I help").not());
}

#[test]
fn test_chat_ignores_blank_lines() {
    Sandbox::new()
        .pulse_cmd()
        .args(["chat", "--delay-ms", "0"])
        .write_stdin("\n   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pulse [").not());
}

#[test]
fn test_chat_rejects_excessive_delay() {
    Sandbox::new()
        .pulse_cmd()
        .args(["chat", "--delay-ms", "20000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --delay-ms value"));
}

#[test]
fn test_chat_uses_configured_labels() {
    Sandbox::new()
        .with_project_config("[chat]\nbot_name = \"DJ\"\nuser_label = \"Me\"\nreply_delay_ms = 0\n")
        .pulse_cmd()
        .arg("chat")
        .write_stdin("new music please\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Me: ")
                .and(predicate::str::contains("DJ ["))
                .and(predicate::str::contains("I'd love to help with music!")),
        );
}
