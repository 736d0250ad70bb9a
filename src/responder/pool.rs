//! Random reply-pool responder
//!
//! The dashboard chat widget does not inspect the utterance at all: it picks
//! one reply uniformly at random from a small fixed pool. This responder
//! reproduces that behavior behind the same trait as the keyword matcher.

use rand::Rng;

use super::Responder;

/// Fixed reply pool, sampled uniformly per utterance
const REPLIES: &[&str] = &[
    "That's a great question! Suliman specializes in Flutter development and IoT solutions.",
    "I'd be happy to help you learn more about Suliman's projects and experience.",
    "Suliman has extensive experience with Firebase, Dart, and mobile app development.",
    "Would you like to know more about any specific project or technology?",
];

const GREETING: &str = "Hello! I'm Suliman's AI assistant. How can I help you today?";

/// Responder that ignores the utterance and answers from a fixed pool
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolResponder;

impl PoolResponder {
    /// Creates a new pool responder
    pub fn new() -> Self {
        Self
    }

    /// Returns the reply pool
    pub fn replies() -> &'static [&'static str] {
        REPLIES
    }
}

impl Responder for PoolResponder {
    fn respond(&self, _utterance: &str) -> String {
        let index = rand::rng().random_range(0..REPLIES.len());
        REPLIES[index].to_string()
    }

    fn greeting(&self) -> &'static str {
        GREETING
    }

    fn name(&self) -> &'static str {
        "pool"
    }
}
