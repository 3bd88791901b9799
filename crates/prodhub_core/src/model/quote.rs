//! Quote reference data.

use serde::{Deserialize, Serialize};

/// Static quote; no owner, no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

const BUILT_IN_QUOTES: &[(&str, &str)] = &[
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Believe you can and you're halfway there.",
        "Theodore Roosevelt",
    ),
    (
        "It does not matter how slowly you go as long as you do not stop.",
        "Confucius",
    ),
    (
        "You are never too old to set another goal or to dream a new dream.",
        "C.S. Lewis",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Don't watch the clock; do what it does. Keep going.",
        "Sam Levenson",
    ),
    (
        "The secret of getting ahead is getting started.",
        "Mark Twain",
    ),
    ("Quality is not an act, it is a habit.", "Aristotle"),
    (
        "Motivation is what gets you started. Habit is what keeps you going.",
        "Jim Ryun",
    ),
    (
        "Success is not final, failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
];

/// Returns the built-in quote list used to seed an empty store.
pub fn built_in_quotes() -> Vec<Quote> {
    BUILT_IN_QUOTES
        .iter()
        .map(|(text, author)| Quote::new(*text, *author))
        .collect()
}
