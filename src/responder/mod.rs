//! Responder module for Foliochat
//!
//! This module contains the responder abstraction and the two canned-reply
//! implementations: the keyword matcher and the random reply pool.

pub mod keyword;
pub mod pool;

pub use keyword::{KeywordResponder, Rule};
pub use pool::PoolResponder;

use crate::config::ResponderConfig;
use crate::error::Result;

/// Responder trait for canned-reply engines
///
/// A responder deterministically or randomly selects one fixed reply for a
/// user utterance. Responding never fails: every input, including the empty
/// string, yields a reply.
///
/// # Examples
///
/// ```
/// use foliochat::responder::{KeywordResponder, Responder};
///
/// let responder = KeywordResponder::new();
/// let reply = responder.respond("tell me about your experience");
/// assert!(reply.contains("experience"));
/// ```
pub trait Responder: Send + Sync {
    /// Selects one reply for the given utterance
    ///
    /// Pure with respect to observable conversation state: no side effects,
    /// no error conditions.
    fn respond(&self, utterance: &str) -> String;

    /// The seed assistant message a new conversation opens with
    fn greeting(&self) -> &'static str;

    /// Short identifier for this responder kind
    fn name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder").field("name", &self.name()).finish()
    }
}

/// Create a responder instance based on configuration
///
/// # Arguments
///
/// * `kind` - Kind of responder ("keyword" or "pool")
/// * `config` - Responder configuration
///
/// # Returns
///
/// Returns a boxed responder instance
///
/// # Errors
///
/// Returns error if the responder kind is unknown
///
/// # Examples
///
/// ```
/// use foliochat::config::ResponderConfig;
/// use foliochat::responder::create_responder;
///
/// let responder = create_responder("keyword", &ResponderConfig::default()).unwrap();
/// assert_eq!(responder.name(), "keyword");
/// ```
pub fn create_responder(kind: &str, _config: &ResponderConfig) -> Result<Box<dyn Responder>> {
    match kind {
        "keyword" => Ok(Box::new(KeywordResponder::new())),
        "pool" => Ok(Box::new(PoolResponder::new())),
        _ => Err(crate::error::FoliochatError::Responder(format!(
            "Unknown responder kind: {}",
            kind
        ))
        .into()),
    }
}
