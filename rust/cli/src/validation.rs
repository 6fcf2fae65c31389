//! Key parsing for the interactive session.
//!
//! The terminal has no raw key events, so each typed line stands for one key
//! press and is mapped onto the logical events the engine understands.

/// Logical event produced by one line of input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum KeyCommand {
    /// Space: play the next round, resolve a war, or begin from the menu
    Advance,
    /// Deal a fresh game from any phase
    Start,
    /// R: deal again once play has started
    Restart,
    /// Escape: leave the session
    Quit,
}

/// Result type for parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Key(KeyCommand),
    /// Unrecognized input with error message
    Invalid(String),
}

/// Parse a typed line into a [`KeyCommand`].
///
/// Accepts the following input (case-insensitive):
/// - empty line, a single space, "a", "advance", "space" → Advance
/// - "s" or "start" → Start
/// - "r" or "restart" → Restart
/// - "q", "quit", "esc" or "escape" → Quit
///
/// # Example
///
/// ```rust
/// # use classwar_cli::validation::{parse_key_command, KeyCommand, ParseResult};
/// assert_eq!(parse_key_command(""), ParseResult::Key(KeyCommand::Advance));
/// assert_eq!(parse_key_command("R"), ParseResult::Key(KeyCommand::Restart));
/// assert_eq!(parse_key_command("esc"), ParseResult::Key(KeyCommand::Quit));
///
/// match parse_key_command("jump") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_key_command(input: &str) -> ParseResult {
    let key = input.trim().to_lowercase();
    match key.as_str() {
        "" | "a" | "advance" | "space" => ParseResult::Key(KeyCommand::Advance),
        "s" | "start" => ParseResult::Key(KeyCommand::Start),
        "r" | "restart" => ParseResult::Key(KeyCommand::Restart),
        "q" | "quit" | "esc" | "escape" => ParseResult::Key(KeyCommand::Quit),
        other => ParseResult::Invalid(format!(
            "Unrecognized key '{}'. Valid keys: <enter>/space (advance), s (start), r (restart), q (quit)",
            other
        )),
    }
}
