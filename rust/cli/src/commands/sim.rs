//! # Sim Command
//!
//! Plays whole games without input. Game `i` (zero-based) is dealt with seed
//! `base + i`, so any reported game can be replayed with `play --seed`.

use crate::config;
use crate::error::CliError;
use crate::ui;
use classwar_engine::engine::RoundEngine;
use classwar_engine::game::{Outcome, Phase, Side};
use std::io::Write;

/// Result of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub seed: u64,
    /// `None` when the round cap was reached first
    pub winner: Option<Side>,
    pub rounds: u32,
    pub wars: u32,
}

/// Handle the sim command.
///
/// Flags override the configuration; `games` and `max_rounds` must be at
/// least 1.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for zero counts, `CliError::Config` for an
/// invalid configuration, `CliError::Engine` if a finished game fails its card
/// check, and `CliError::Io` if writing fails.
pub fn handle_sim_command(
    games: Option<u32>,
    seed: Option<u64>,
    max_rounds: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = match config::load() {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    let games = games.unwrap_or(cfg.games);
    let max_rounds = max_rounds.unwrap_or(cfg.max_rounds);
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if max_rounds == 0 {
        ui::write_error(err, "max-rounds must be >= 1")?;
        return Err(CliError::InvalidInput("max-rounds must be >= 1".to_string()));
    }
    let base = seed.or(cfg.seed).unwrap_or_else(rand::random);

    writeln!(
        out,
        "sim: games={} seed={} max_rounds={}",
        games, base, max_rounds
    )?;

    let mut player_wins = 0u32;
    let mut opponent_wins = 0u32;
    let mut unfinished = 0u32;
    for i in 0..games {
        let report = simulate_game(base.wrapping_add(u64::from(i)), max_rounds)?;
        match report.winner {
            Some(Side::Player) => player_wins += 1,
            Some(Side::Opponent) => opponent_wins += 1,
            None => unfinished += 1,
        }
        let result = report
            .winner
            .map_or_else(|| "unfinished".to_string(), |w| format!("{} wins", w));
        writeln!(
            out,
            "Game {}: seed={} rounds={} wars={} {}",
            i + 1,
            report.seed,
            report.rounds,
            report.wars,
            result
        )?;
    }

    writeln!(
        out,
        "Summary: games={} player={} opponent={} unfinished={}",
        games, player_wins, opponent_wins, unfinished
    )?;
    Ok(())
}

/// Starts a game and advances it until someone wins or `max_rounds` rounds
/// have been played.
///
/// # Errors
///
/// Returns `CliError::Engine` if the final state fails [`RoundEngine::verify`].
pub fn simulate_game(seed: u64, max_rounds: u32) -> Result<GameReport, CliError> {
    let mut eng = RoundEngine::with_seed(Some(seed));
    eng.start();
    while eng.winner().is_none() && eng.rounds() < max_rounds {
        if eng.advance() == Outcome::Ignored {
            break;
        }
    }
    // a war declared on the last allowed round still gets resolved
    if eng.winner().is_none() && eng.phase() == Phase::War {
        eng.advance();
    }
    eng.verify()?;

    let report = GameReport {
        seed,
        winner: eng.winner(),
        rounds: eng.rounds(),
        wars: eng.wars(),
    };
    tracing::info!(
        seed,
        rounds = report.rounds,
        wars = report.wars,
        winner = ?report.winner,
        "game simulated"
    );
    Ok(report)
}
