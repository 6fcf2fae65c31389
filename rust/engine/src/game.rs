use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::items::Item;

/// Phase of the round state machine.
/// `Menu` is initial; `GameOver` only leaves through a restart.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing dealt yet
    Menu,
    /// Regular rounds: one face-up card per side
    Playing,
    /// A tie is on the table and waits for stakes
    War,
    /// One side holds every card
    GameOver,
}

/// One of the two seats.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Both sides, player first. Resolution steps iterate in this order.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("Player"),
            Side::Opponent => f.write_str("Opponent"),
        }
    }
}

/// What a driving operation did. Hosts use this to pick messages and effects
/// without diffing snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was not valid in the current phase (or a card was already face-up)
    Ignored,
    /// A fresh game was dealt
    Started,
    /// A regular round produced a winner
    RoundWon {
        winner: Side,
        player_value: i32,
        opponent_value: i32,
        /// Cards paid out to the winner
        cards: usize,
    },
    /// Both sides revealed the same effective value
    WarDeclared { value: i32 },
    /// A war was resolved and the winner equipped a new item
    WarWon {
        winner: Side,
        player_value: i32,
        opponent_value: i32,
        cards: usize,
        item: Item,
        /// True when the values were equal and the pot went to the player by default
        tie_break: bool,
    },
    /// A side could not post its war stakes and lost the game
    Forfeit { winner: Side, cards: usize },
}

/// Read-only view of the engine handed to the renderer once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub player_cards: usize,
    pub opponent_cards: usize,
    pub player_revealed: Option<Card>,
    pub opponent_revealed: Option<Card>,
    pub player_item: Option<Item>,
    pub opponent_item: Option<Item>,
    /// Cards in the pot, face-up cards included
    pub pot: usize,
    pub winner: Option<Side>,
    pub status: String,
    pub rounds: u32,
    pub wars: u32,
}
