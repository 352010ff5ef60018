//! # Response Generation
//!
//! File: cli/src/chat/responder.rs
//!
//! ## Overview
//!
//! Picks the bot's reply for a classified message. Every intent maps to a
//! fixed line; `music` and `events` switch to a template naming the first
//! recognised entity when one is present.
//!
//! The `general` fallback mentions `current_topic`. Because the context is
//! updated before this runs, that topic is the one just set for the current
//! message, which for this branch is always `general` itself. The reply
//! therefore reads "Are you still asking about general?" rather than naming
//! an earlier topic.
//!
use super::context::ConversationState;
use super::types::{Intent, ParsedMessage};

const GREETING_REPLY: &str = "Hello! How can I help you today? I can assist with music recommendations, event information, or matchmaking questions.";
const MUSIC_REPLY: &str = "I'd love to help with music! You can ask me about artists, genres, recommendations, or connecting your Spotify account.";
const EVENTS_REPLY: &str = "I can help you discover concerts and events! Would you like to see upcoming shows, search by artist, or check the concert map?";
const MATCHMAKING_REPLY: &str = "Matchmaking helps you connect with people who share similar music tastes. I can help you understand how it works or adjust your matchmaking preferences in settings.";
const PROFILE_REPLY: &str = "You can update your profile, music preferences, and settings. Would you like me to guide you to the profile or settings page?";
const HELP_REPLY: &str = "I'm here to help! I can assist with:\n\
    • Music recommendations and artist information\n\
    • Event and concert details\n\
    • Matchmaking and connections\n\
    • Profile and settings guidance\n\
    \n\
    What would you like to know?";
const GOODBYE_REPLY: &str = "Thanks for chatting! Feel free to come back anytime if you need help. Have a great day!";
const FALLBACK_REPLY: &str = "I'm here to help! Try asking me about music, events, matchmaking, or your profile. What would you like to know?";

/// Returns the reply for `parsed`. Deterministic for a given message and
/// topic; never fails.
pub fn respond(parsed: &ParsedMessage, state: &ConversationState) -> String {
    let entities = &parsed.entities;

    match parsed.intent {
        Intent::Greeting => GREETING_REPLY.to_string(),
        Intent::Music => {
            if let Some(artist) = entities.artists.first() {
                format!("I see you're interested in {}. I can help you find similar artists or recommend playlists. Would you like me to suggest some music based on your taste?", artist)
            } else if let Some(genre) = entities.genres.first() {
                format!("Great! {} is a fantastic genre. I can help you discover new artists in this style or find events related to it.", genre)
            } else {
                MUSIC_REPLY.to_string()
            }
        }
        Intent::Events => match entities.locations.first() {
            Some(location) => format!("I can help you find events in {}. Check out the Events page for upcoming concerts and shows near you!", location),
            None => EVENTS_REPLY.to_string(),
        },
        Intent::Matchmaking => MATCHMAKING_REPLY.to_string(),
        Intent::Profile => PROFILE_REPLY.to_string(),
        Intent::Help => HELP_REPLY.to_string(),
        Intent::Goodbye => GOODBYE_REPLY.to_string(),
        Intent::General => match state.context.current_topic {
            Some(topic) => format!("I'm not sure I understand. Are you still asking about {}? Feel free to rephrase your question or ask for help!", topic),
            None => FALLBACK_REPLY.to_string(),
        },
    }
}
