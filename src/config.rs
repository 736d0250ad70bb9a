//! Configuration management for Foliochat
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, FoliochatError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on the simulated reply delay, applied to config-file, env,
/// and CLI values alike. Anything past a minute would read as a hang, not a
/// thinking pause.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Main configuration structure for Foliochat
///
/// Holds the responder selection and chat session behavior. The canned
/// reply tables themselves are compile-time constants and have no runtime
/// mutation path; configuration only selects between them and tunes the
/// presentation delay.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Responder configuration (keyword matcher or reply pool)
    #[serde(default)]
    pub responder: ResponderConfig,

    /// Chat session configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Responder configuration
///
/// Specifies which canned-reply engine to use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Kind of responder to use ("keyword" or "pool")
    #[serde(rename = "type", default = "default_responder_kind")]
    pub kind: String,
}

fn default_responder_kind() -> String {
    "keyword".to_string()
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            kind: default_responder_kind(),
        }
    }
}

/// Chat session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Simulated thinking delay before the assistant reply is appended
    /// (milliseconds). Purely a presentation affectation.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Show message timestamps in the interactive transcript
    #[serde(default)]
    pub show_timestamps: bool,
}

fn default_reply_delay_ms() -> u64 {
    1000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            show_timestamps: false,
        }
    }
}

impl Config {
    /// Load configuration from a file with environment and CLI overrides
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments for overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(FoliochatError::Io)?;
        Ok(serde_yaml::from_str(&contents).map_err(FoliochatError::Yaml)?)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(kind) = std::env::var("FOLIOCHAT_RESPONDER") {
            self.responder.kind = kind;
        }

        if let Ok(delay) = std::env::var("FOLIOCHAT_REPLY_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.chat.reply_delay_ms = ms,
                Err(_) => {
                    tracing::warn!("Ignoring non-numeric FOLIOCHAT_REPLY_DELAY_MS: {}", delay)
                }
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.responder.kind.is_empty() {
            return Err(FoliochatError::Config("Responder kind cannot be empty".to_string()).into());
        }

        let valid_kinds = ["keyword", "pool"];
        if !valid_kinds.contains(&self.responder.kind.as_str()) {
            return Err(FoliochatError::Config(format!(
                "Invalid responder kind: {}. Must be one of: {}",
                self.responder.kind,
                valid_kinds.join(", ")
            ))
            .into());
        }

        if self.chat.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(FoliochatError::Config(format!(
                "reply_delay_ms must be at most {}",
                MAX_REPLY_DELAY_MS
            ))
            .into());
        }

        Ok(())
    }
}
