//! # classwar-engine: Class War Card Game Core
//!
//! A deterministic two-player "War" card game where every card carries an RPG
//! class and war winners earn items that boost later cards. The crate owns the
//! game rules and the round/war state machine; rendering and input belong to
//! the host.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, CardClass, Card) and deck construction
//! - [`deck`] - Shuffling and the alternating deal into two piles
//! - [`items`] - The item catalog awarded to war winners
//! - [`rng`] - The random source seam and its seeded ChaCha20 implementation
//! - [`rules`] - Effective card values and round/war winners
//! - [`game`] - Phase, sides, operation outcomes and the render snapshot
//! - [`engine`] - The [`RoundEngine`](engine::RoundEngine) state machine
//! - [`errors`] - Error types for invariant checks
//!
//! ## Quick Start
//!
//! ```rust
//! use classwar_engine::engine::RoundEngine;
//! use classwar_engine::game::{Outcome, Phase};
//!
//! let mut engine = RoundEngine::with_seed(Some(42));
//! engine.start();
//!
//! match engine.advance() {
//!     Outcome::RoundWon { winner, .. } => println!("{} takes the round", winner),
//!     Outcome::WarDeclared { value } => println!("war at {}", value),
//!     other => println!("{:?}", other),
//! }
//! assert_ne!(engine.phase(), Phase::Menu);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Deals and item awards come from a seeded ChaCha20 stream, so the same seed
//! replays the same game:
//!
//! ```rust
//! use classwar_engine::engine::RoundEngine;
//!
//! let mut a = RoundEngine::with_seed(Some(7));
//! let mut b = RoundEngine::with_seed(Some(7));
//! a.start();
//! b.start();
//! assert_eq!(a.snapshot(), b.snapshot());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod items;
pub mod rng;
pub mod rules;
