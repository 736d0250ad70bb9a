//! Foliochat - Portfolio assistant chatbot CLI library
//!
//! This library provides the core functionality for Foliochat, a canned-
//! response dialogue engine packaged as an interactive chat CLI.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `responder`: Canned-reply engines (keyword matcher, reply pool)
//! - `conversation`: Append-only message sequences
//! - `session`: The turn engine pairing a conversation with a responder
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: CLI command handlers
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use foliochat::responder::KeywordResponder;
//! use foliochat::session::ChatSession;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut session = ChatSession::new(Box::new(KeywordResponder::new()), Duration::ZERO);
//! let reply = session.send("what are your skills?").await.unwrap();
//! assert!(reply.contains("React"));
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod conversation;
pub mod error;
pub mod responder;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use conversation::{Conversation, Message, Sender};
pub use error::{FoliochatError, Result};
pub use responder::{create_responder, KeywordResponder, PoolResponder, Responder};
pub use session::ChatSession;
