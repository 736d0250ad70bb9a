//! Command-line interface definition for Foliochat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot resolution, and
//! inspecting the rule table.

use clap::{Parser, Subcommand};

/// Foliochat - Portfolio assistant chatbot CLI
///
/// Chat with a canned-response dialogue engine: an ordered keyword matcher
/// or a fixed reply pool.
#[derive(Parser, Debug, Clone)]
#[command(name = "foliochat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Foliochat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start interactive chat mode
    Chat {
        /// Override the responder from config (keyword, pool)
        #[arg(short, long)]
        responder: Option<String>,

        /// Override the simulated reply delay in milliseconds
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },

    /// Resolve a single utterance and print the reply
    Ask {
        /// The utterance to resolve
        utterance: String,

        /// Override the responder from config (keyword, pool)
        #[arg(short, long)]
        responder: Option<String>,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the keyword rule table in priority order
    Rules {
        /// Emit the rule table as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Chat {
                responder: None,
                delay_ms: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default() {
        let cli = Cli::default();
        assert_eq!(cli.config, Some("config/config.yaml".to_string()));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Chat { .. }));
    }

    #[test]
    fn test_cli_parse_chat_command() {
        let cli = Cli::try_parse_from(["foliochat", "chat"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat {
            responder,
            delay_ms,
        } = cli.command
        {
            assert_eq!(responder, None);
            assert_eq!(delay_ms, None);
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_responder() {
        let cli = Cli::try_parse_from(["foliochat", "chat", "--responder", "pool"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { responder, .. } = cli.command {
            assert_eq!(responder, Some("pool".to_string()));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_chat_with_delay() {
        let cli = Cli::try_parse_from(["foliochat", "chat", "--delay-ms", "0"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Chat { delay_ms, .. } = cli.command {
            assert_eq!(delay_ms, Some(0));
        } else {
            panic!("Expected Chat command");
        }
    }

    #[test]
    fn test_cli_parse_ask() {
        let cli = Cli::try_parse_from(["foliochat", "ask", "tell me about your experience"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Ask {
            utterance,
            responder,
            json,
        } = cli.command
        {
            assert_eq!(utterance, "tell me about your experience");
            assert_eq!(responder, None);
            assert!(!json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_with_json() {
        let cli = Cli::try_parse_from(["foliochat", "ask", "skills?", "--json"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Ask { json, .. } = cli.command {
            assert!(json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_with_responder_override() {
        let cli = Cli::try_parse_from(["foliochat", "ask", "hi", "--responder", "pool"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Ask { responder, .. } = cli.command {
            assert_eq!(responder, Some("pool".to_string()));
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_requires_utterance() {
        let cli = Cli::try_parse_from(["foliochat", "ask"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_rules() {
        let cli = Cli::try_parse_from(["foliochat", "rules"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Rules { json } = cli.command {
            assert!(!json);
        } else {
            panic!("Expected Rules command");
        }
    }

    #[test]
    fn test_cli_parse_rules_json() {
        let cli = Cli::try_parse_from(["foliochat", "rules", "--json"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        if let Commands::Rules { json } = cli.command {
            assert!(json);
        } else {
            panic!("Expected Rules command");
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::try_parse_from(["foliochat", "--config", "custom.yaml", "rules"]);
        assert!(cli.is_ok());
        let cli = cli.unwrap();
        assert_eq!(cli.config, Some("custom.yaml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_verbose() {
        let cli = Cli::try_parse_from(["foliochat", "-v", "rules"]);
        assert!(cli.is_ok());
        assert!(cli.unwrap().verbose);
    }

    #[test]
    fn test_cli_parse_missing_command() {
        let cli = Cli::try_parse_from(["foliochat"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_cli_parse_invalid_command() {
        let cli = Cli::try_parse_from(["foliochat", "invalid"]);
        assert!(cli.is_err());
    }
}
