//! # Class War CLI Library
//!
//! Terminal host for the Class War card engine: an interactive session that
//! maps typed keys onto engine events, a non-interactive simulator, and
//! configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching
//! subcommand. [`run_with_input`] does the same with an injected input stream
//! for the interactive command.
//!
//! ```
//! use std::io;
//! let args = vec!["classwar", "sim", "--games", "2", "--seed", "42"];
//! let code = classwar_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Interactive game, one key per line
//! - `sim`: Play whole games and summarize the winners
//! - `items`: List the war rewards
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{ClasswarCli, Commands};
use commands::{
    handle_cfg_command, handle_items_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Reads interactive input from the locked stdin.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] on success, [`exit_code::ERROR`] otherwise
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], reading interactive input from `input`.
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = "s\n\nq\n".as_bytes();
/// let code = classwar_cli::run_with_input(
///     ["classwar", "play", "--seed", "5"],
///     &mut out,
///     &mut err,
///     &mut input,
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ClasswarCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Play { seed } => handle_play_command(seed, out, err, input),
        Commands::Sim {
            games,
            seed,
            max_rounds,
        } => handle_sim_command(games, seed, max_rounds, out, err),
        Commands::Items => handle_items_command(out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Class War CLI").is_err()
                || writeln!(err, "Usage: classwar <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in Commands::NAMES {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: classwar --help");
            exit_code::ERROR
        }
    }
}
