//! Error types for Foliochat
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Foliochat operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, responder construction, and command handling.
/// Resolving an utterance itself never fails: every input yields a reply.
#[derive(Error, Debug)]
pub enum FoliochatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Responder-related errors (unknown kind, bad overrides)
    #[error("Responder error: {0}")]
    Responder(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Foliochat operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
