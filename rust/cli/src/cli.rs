//! Command-line definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "classwar",
    version,
    about = "Class War: the card game of War with RPG classes and items"
)]
pub struct ClasswarCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively: one line per key press
    Play {
        /// RNG seed for the deal and item awards
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play whole games without input and report the winners
    Sim {
        /// Number of games to play
        #[arg(long)]
        games: Option<u32>,
        /// Base seed; game N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
        /// Stop a game that is still running after this many rounds
        #[arg(long)]
        max_rounds: Option<u32>,
    },
    /// List the items a war winner can receive
    Items,
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub const NAMES: &'static [&'static str] = &["play", "sim", "items", "cfg"];
}
