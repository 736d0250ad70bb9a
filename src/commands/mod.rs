/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`  — Interactive chat mode
- `ask`   — One-shot utterance resolution
- `rules` — Rule table inspection

These handlers are intentionally small and use the library components:
responders, conversations, and the chat session.
*/

use crate::config::Config;
use crate::error::{FoliochatError, Result};
use crate::responder::create_responder;

// Special commands parser for the interactive loop
pub mod special;

// Chat command handler
pub mod chat {
    //! Interactive chat mode handler.
    //!
    //! Instantiates the configured responder, creates a `ChatSession`, and
    //! runs a readline-based loop that submits user input to the session.

    use super::*;
    use crate::commands::special::{parse_special_command, print_help, SpecialCommand};
    use crate::session::ChatSession;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;
    use std::time::Duration;

    /// Start interactive chat mode
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `responder_kind` - Optional override for the configured responder
    /// * `delay_ms` - Optional override for the simulated reply delay
    ///
    /// # Errors
    ///
    /// Returns error if the responder kind is unknown or readline fails
    pub async fn run_chat(
        config: Config,
        responder_kind: Option<String>,
        delay_ms: Option<u64>,
    ) -> Result<()> {
        tracing::info!("Starting interactive chat mode");

        let kind = responder_kind
            .as_deref()
            .unwrap_or(&config.responder.kind);
        let delay = effective_reply_delay(delay_ms, config.chat.reply_delay_ms)?;

        let responder = create_responder(kind, &config.responder)?;
        let mut session = ChatSession::new(responder, delay);

        let mut rl = DefaultEditor::new()?;

        print_welcome_banner(&session);

        loop {
            match rl.readline(&format!("{} ", ">>".purple())) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        // Blank sends are a no-op by policy.
                        continue;
                    }

                    match parse_special_command(trimmed) {
                        SpecialCommand::Help => {
                            print_help();
                            continue;
                        }
                        SpecialCommand::Status => {
                            print_status_display(&session);
                            continue;
                        }
                        SpecialCommand::Rules => {
                            super::rules::print_rule_table();
                            continue;
                        }
                        SpecialCommand::Clear => {
                            session.reset();
                            println!("Conversation cleared.\n");
                            print_transcript_line(&session, config.chat.show_timestamps);
                            continue;
                        }
                        SpecialCommand::Exit => break,
                        SpecialCommand::None => {}
                    }

                    rl.add_history_entry(trimmed)?;

                    if session.send(&line).await.is_some() {
                        print_transcript_line(&session, config.chat.show_timestamps);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Resolve the reply delay, enforcing the configured cap on CLI overrides
    ///
    /// The config value has already passed `Config::validate`, but the
    /// `--delay-ms` flag arrives unvalidated and gets the same cap here.
    fn effective_reply_delay(override_ms: Option<u64>, config_ms: u64) -> Result<Duration> {
        let ms = override_ms.unwrap_or(config_ms);
        if ms > crate::config::MAX_REPLY_DELAY_MS {
            return Err(FoliochatError::Config(format!(
                "reply delay must be at most {} ms, got {}",
                crate::config::MAX_REPLY_DELAY_MS,
                ms
            ))
            .into());
        }
        Ok(Duration::from_millis(ms))
    }

    /// Display welcome banner at the start of interactive chat mode
    fn print_welcome_banner(session: &ChatSession) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║            Foliochat Interactive Mode - Welcome!             ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!(
            "Responder: {} (reply delay {} ms)",
            session.responder_name().cyan(),
            session.reply_delay().as_millis()
        );
        if let Some(greeting) = session.last_message() {
            println!("\n{} {}\n", "assistant:".green(), greeting.text);
        }
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

    /// Print the most recent assistant reply
    fn print_transcript_line(session: &ChatSession, show_timestamps: bool) {
        if let Some(message) = session.last_message() {
            if show_timestamps {
                println!(
                    "\n{} [{}] {}\n",
                    "assistant:".green(),
                    message.timestamp.format("%H:%M:%S"),
                    message.text
                );
            } else {
                println!("\n{} {}\n", "assistant:".green(), message.text);
            }
        }
    }

    /// Display session status, called for the '/status' command
    fn print_status_display(session: &ChatSession) {
        println!("\nResponder:    {}", session.responder_name().cyan());
        println!("Reply delay:  {} ms", session.reply_delay().as_millis());
        println!(
            "Transcript:   {} messages\n",
            session.conversation().len()
        );
    }

}

// One-shot resolution handler
pub mod ask {
    //! One-shot `ask` handler.
    //!
    //! Resolves a single utterance without a conversation or the simulated
    //! delay and prints the reply, optionally as JSON.

    use super::*;
    use serde_json::json;

    /// Resolve one utterance and print the reply
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration
    /// * `utterance` - The utterance to resolve
    /// * `responder_kind` - Optional override for the configured responder
    /// * `json` - Emit `{utterance, responder, reply}` as JSON
    ///
    /// # Errors
    ///
    /// Returns error if the responder kind is unknown
    pub fn run_ask(
        config: &Config,
        utterance: &str,
        responder_kind: Option<String>,
        json: bool,
    ) -> Result<()> {
        let kind = responder_kind
            .as_deref()
            .unwrap_or(&config.responder.kind);
        let responder = create_responder(kind, &config.responder)?;

        let reply = responder.respond(utterance);

        if json {
            let output = json!({
                "utterance": utterance,
                "responder": responder.name(),
                "reply": reply,
            });
            let rendered =
                serde_json::to_string_pretty(&output).map_err(FoliochatError::Serialization)?;
            println!("{}", rendered);
        } else {
            println!("{}", reply);
        }

        Ok(())
    }
}

// Rule table inspection handler
pub mod rules {
    //! `rules` handler: print the keyword rule table in priority order.

    use super::*;
    use crate::responder::KeywordResponder;
    use colored::Colorize;
    use serde_json::json;

    /// Show the keyword rule table
    ///
    /// # Arguments
    ///
    /// * `json` - Emit the table as JSON instead of formatted text
    pub fn run_rules(json: bool) -> Result<()> {
        if json {
            let table: Vec<_> = KeywordResponder::rules()
                .iter()
                .map(|rule| {
                    json!({
                        "triggers": rule.triggers,
                        "reply": rule.reply,
                    })
                })
                .collect();
            let output = json!({
                "rules": table,
                "default_reply": KeywordResponder::default_reply(),
            });
            let rendered =
                serde_json::to_string_pretty(&output).map_err(FoliochatError::Serialization)?;
            println!("{}", rendered);
        } else {
            print_rule_table();
        }

        Ok(())
    }

    /// Print the rule table as formatted text
    pub(crate) fn print_rule_table() {
        println!("\nKeyword rules, checked top to bottom (first match wins):\n");
        for (index, rule) in KeywordResponder::rules().iter().enumerate() {
            println!(
                "  {}. {}",
                index + 1,
                rule.triggers.join(", ").cyan()
            );
            println!("     {}\n", rule.reply);
        }
        println!("  {}", "default".yellow());
        println!("     {}\n", KeywordResponder::default_reply());
    }
}
