//! # Static Vocabularies
//!
//! File: cli/src/chat/vocabulary.rs
//!
//! All matching in Pulse is plain substring containment against the
//! lowercase lists below. Nothing is tokenized and nothing is word-bounded,
//! so "hi" also matches inside "this" and "like" inside "dislike".
//!
use super::types::Intent;

/// Intent triggers in declaration order.
///
/// The order is load-bearing: a message is assigned the intent of the first
/// entry, scanning top to bottom, that has any trigger contained in the
/// message. Position of the match inside the text and the number of matches
/// per intent play no part. `Intent::General` has no triggers; it is the
/// fallback.
pub const INTENT_TRIGGERS: &[(Intent, &[&str])] = &[
    (
        Intent::Music,
        &[
            "music", "song", "artist", "album", "genre", "listen", "playlist", "spotify",
        ],
    ),
    (
        Intent::Events,
        &["event", "concert", "show", "tour", "ticket", "venue", "date"],
    ),
    (
        Intent::Matchmaking,
        &[
            "match",
            "friend",
            "connect",
            "meet",
            "people",
            "suggest",
            "compatible",
        ],
    ),
    (
        Intent::Profile,
        &["profile", "account", "settings", "preferences", "update"],
    ),
    (
        Intent::Help,
        &[
            "help", "how", "what", "where", "when", "why", "explain", "guide",
        ],
    ),
    (Intent::Greeting, &["hi", "hello", "hey", "greetings", "sup"]),
    (
        Intent::Goodbye,
        &["bye", "goodbye", "see you", "later", "thanks", "thank you"],
    ),
];

pub const ARTISTS: &[&str] = &[
    "tyler the creator",
    "drake",
    "kendrick",
    "taylor swift",
    "ariana grande",
];

pub const GENRES: &[&str] = &[
    "hip hop",
    "rap",
    "pop",
    "rock",
    "jazz",
    "r&b",
    "electronic",
    "indie",
    "country",
    "classical",
];

pub const LOCATIONS: &[&str] = &[
    "los angeles",
    "new york",
    "chicago",
    "san francisco",
    "miami",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "love", "like", "great", "awesome", "amazing", "best", "good", "excited",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "bad", "terrible", "worst", "boring", "sad",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lists() -> Vec<&'static [&'static str]> {
        let mut lists: Vec<&'static [&'static str]> =
            INTENT_TRIGGERS.iter().map(|(_, terms)| *terms).collect();
        lists.extend([ARTISTS, GENRES, LOCATIONS, POSITIVE_WORDS, NEGATIVE_WORDS]);
        lists
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        for list in all_lists() {
            for entry in list {
                assert_eq!(*entry, entry.to_lowercase(), "entry '{}' is not lowercase", entry);
            }
        }
    }

    #[test]
    fn test_entries_are_distinct_within_each_list() {
        for list in all_lists() {
            let mut seen = std::collections::HashSet::new();
            for entry in list {
                assert!(seen.insert(*entry), "duplicate entry '{}'", entry);
            }
        }
    }

    #[test]
    fn test_general_has_no_triggers() {
        assert!(INTENT_TRIGGERS
            .iter()
            .all(|(intent, _)| *intent != Intent::General));
        assert_eq!(INTENT_TRIGGERS.len(), 7);
    }
}
