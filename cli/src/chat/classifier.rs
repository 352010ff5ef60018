//! # Message Classifier
//!
//! File: cli/src/chat/classifier.rs
//!
//! ## Overview
//!
//! Turns one raw message into a `ParsedMessage`. The message is lowercased
//! once, then scanned four ways against the static vocabularies:
//! - intent detection (first matching entry of `INTENT_TRIGGERS` wins)
//! - entity extraction (artists, genres, locations)
//! - sentiment scoring (+1 per positive word, -1 per negative word)
//!
//! Classification is a pure function of the message text. It never fails;
//! text that matches nothing comes back as `Intent::General`.
//!
//! ## Examples
//!
//! ```rust
//! use pulse::chat::{classify, Intent, Sentiment};
//!
//! let parsed = classify("I love Drake, any similar artists?");
//! assert_eq!(parsed.intent, Intent::Music);
//! assert_eq!(parsed.entities.artists, vec!["drake"]);
//! assert_eq!(parsed.sentiment, Sentiment::Positive);
//! ```
//!
use super::types::{Entities, Intent, ParsedMessage, Sentiment};
use super::vocabulary::{
    ARTISTS, GENRES, INTENT_TRIGGERS, LOCATIONS, NEGATIVE_WORDS, POSITIVE_WORDS,
};
use tracing::debug;

/// Classifies a message. Callers are expected to pass trimmed, non-empty
/// text, but any string is accepted.
pub fn classify(message: &str) -> ParsedMessage {
    let lower = message.to_lowercase();

    let (intent, keywords) = detect_intent(&lower);
    let entities = Entities {
        artists: extract_matches(&lower, ARTISTS),
        genres: extract_matches(&lower, GENRES),
        locations: extract_matches(&lower, LOCATIONS),
    };
    let sentiment = score_sentiment(&lower);

    debug!(
        "Classified message as {} (keywords: {:?}, sentiment: {})",
        intent, keywords, sentiment
    );

    ParsedMessage {
        original: message.to_string(),
        intent,
        keywords,
        entities,
        sentiment,
    }
}

/// Records every trigger present in `lower` and picks the intent of the
/// first one in table order.
fn detect_intent(lower: &str) -> (Intent, Vec<String>) {
    let mut keywords = Vec::new();
    let mut detected = None;

    for (intent, terms) in INTENT_TRIGGERS {
        for term in terms.iter().filter(|term| lower.contains(**term)) {
            keywords.push(term.to_string());
            if detected.is_none() {
                detected = Some(*intent);
            }
        }
    }

    (detected.unwrap_or(Intent::General), keywords)
}

fn extract_matches(lower: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|entry| lower.contains(**entry))
        .map(|entry| entry.to_string())
        .collect()
}

fn score_sentiment(lower: &str) -> Sentiment {
    let count = |words: &[&str]| words.iter().filter(|word| lower.contains(**word)).count() as i32;
    let score = count(POSITIVE_WORDS) - count(NEGATIVE_WORDS);

    match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    }
}
