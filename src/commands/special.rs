//! Special command parser for interactive chat
//!
//! Slash commands are handled by the chat loop itself and never reach the
//! responder. Anything that is not a recognized special command is treated
//! as a regular utterance.

/// Special commands recognized by the interactive chat loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Show available commands
    Help,
    /// Show session status (responder, delay, transcript size)
    Status,
    /// Print the keyword rule table
    Rules,
    /// Discard the transcript and restart from the greeting
    Clear,
    /// Leave the chat loop
    Exit,
    /// Not a special command; treat as a regular utterance
    None,
}

/// Parse a line of user input into a special command
///
/// Matching is case-insensitive. `exit` and `quit` work without a leading
/// slash, mirroring common chat CLIs.
///
/// # Examples
///
/// ```
/// use foliochat::commands::special::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/help"), SpecialCommand::Help);
/// assert_eq!(parse_special_command("exit"), SpecialCommand::Exit);
/// assert_eq!(parse_special_command("tell me more"), SpecialCommand::None);
/// ```
pub fn parse_special_command(input: &str) -> SpecialCommand {
    match input.trim().to_lowercase().as_str() {
        "/help" | "/h" => SpecialCommand::Help,
        "/status" => SpecialCommand::Status,
        "/rules" => SpecialCommand::Rules,
        "/clear" => SpecialCommand::Clear,
        "/exit" | "/quit" | "exit" | "quit" => SpecialCommand::Exit,
        _ => SpecialCommand::None,
    }
}

/// Print help text for the interactive chat loop
pub fn print_help() {
    println!("\nAvailable commands:");
    println!("  /help    Show this help");
    println!("  /status  Show session status");
    println!("  /rules   Show the keyword rule table");
    println!("  /clear   Restart the conversation from the greeting");
    println!("  exit     Leave chat (also: quit, /exit, /quit)");
    println!("\nAnything else is sent to the assistant.\n");
}
