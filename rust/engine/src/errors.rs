use thiserror::Error;

use crate::cards::Card;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Card count mismatch: expected {expected}, found {actual}")]
    CardCount { expected: usize, actual: usize },
    #[error("Card {0} is held in more than one place")]
    DuplicateCard(Card),
}
