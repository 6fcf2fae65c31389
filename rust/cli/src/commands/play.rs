//! # Play Command
//!
//! Interactive session driving one [`RoundEngine`] from typed keys.
//!
//! Every line read from the input is one key press. Space (or an empty line)
//! advances the game, `r` deals again once play has begun, and `q` or `esc`
//! ends the session. After each accepted event the status line and a board
//! summary are printed.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{KeyCommand, ParseResult, parse_key_command};
use classwar_engine::engine::RoundEngine;
use classwar_engine::game::{Outcome, Phase};
use classwar_engine::rng::RandomSource;
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// The seed comes from `--seed`, then the configuration, then a random draw.
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration and `CliError::Io`
/// if writing to the output fails.
///
/// # Examples
///
/// ```
/// use classwar_cli::commands::handle_play_command;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = "\n\nq\n".as_bytes();
/// handle_play_command(Some(3), &mut out, &mut err, &mut input).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("play: seed=3"));
/// assert!(text.contains("Session ended after 2 events"));
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(out, "play: seed={}", seed)?;
    let mut eng = RoundEngine::with_seed(Some(seed));
    run_session(&mut eng, out, err, stdin)
}

/// Reads keys until quit or end of input and returns after printing the
/// session summary.
fn run_session<R: RandomSource>(
    eng: &mut RoundEngine<R>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "{}", eng.status())?;

    let mut events = 0u32;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        let key = match parse_key_command(&line) {
            ParseResult::Key(key) => key,
            ParseResult::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };
        let outcome = match key {
            KeyCommand::Quit => break,
            KeyCommand::Advance if eng.phase() == Phase::Menu => eng.start(),
            KeyCommand::Advance => eng.advance(),
            KeyCommand::Start => eng.start(),
            KeyCommand::Restart => eng.restart(),
        };
        events += 1;
        tracing::debug!(?key, ?outcome, phase = ?eng.phase(), "key handled");

        if outcome == Outcome::Ignored {
            match (key, eng.phase()) {
                (KeyCommand::Restart, Phase::Menu) => {
                    ui::display_warning(err, "Nothing to restart yet. Press SPACE to start")?
                }
                (KeyCommand::Advance, Phase::GameOver) => {
                    ui::display_warning(err, "The game is over. Press R to restart")?
                }
                _ => {}
            }
        }

        writeln!(out, "{}", eng.status())?;
        writeln!(out, "{}", format_board(&eng.snapshot()))?;
    }

    writeln!(out, "Session ended after {} events", events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classwar_engine::rng::SeededRandom;

    fn session(input: &str) -> (RoundEngine, String, String) {
        let mut eng = RoundEngine::new(SeededRandom::new(11));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut reader = input.as_bytes();
        run_session(&mut eng, &mut out, &mut err, &mut reader).unwrap();
        (
            eng,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn advance_in_menu_starts_the_game() {
        let (eng, out, _) = session(" \n");
        assert_eq!(eng.phase(), Phase::Playing);
        assert!(out.contains("Cards dealt"));
        assert!(out.contains("Player 26 | Opponent 26"));
    }

    #[test]
    fn second_advance_plays_a_round() {
        let (eng, _, _) = session("\n\n");
        assert_eq!(eng.rounds(), 1);
    }

    #[test]
    fn restart_in_menu_warns_and_stays() {
        let (eng, _, err) = session("r\n");
        assert_eq!(eng.phase(), Phase::Menu);
        assert!(err.contains("WARNING: Nothing to restart yet"));
    }

    #[test]
    fn invalid_key_reports_and_continues() {
        let (eng, out, err) = session("jump\ns\n");
        assert!(err.contains("Error: Unrecognized key 'jump'"));
        assert_eq!(eng.phase(), Phase::Playing);
        assert!(out.contains("Session ended after 1 events"));
    }

    #[test]
    fn quit_stops_reading() {
        let (eng, out, _) = session("s\nq\n\n\n");
        assert_eq!(eng.rounds(), 0);
        assert!(out.contains("Session ended after 1 events"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let (_, out, _) = session("");
        assert!(out.starts_with("Press SPACE to start"));
        assert!(out.trim_end().ends_with("Session ended after 0 events"));
    }
}
