use std::collections::VecDeque;

use crate::cards::{full_deck, Card};
use crate::rng::RandomSource;

pub const DECK_SIZE: usize = 52;

/// The 52-card deck used to seed a game.
///
/// A deck is built in suit/rank order, shuffled once by the host's random
/// source, then consumed by [`Deck::deal`] into the two starting sequences.
///
/// ```
/// use classwar_engine::deck::Deck;
/// use classwar_engine::rng::SeededRandom;
///
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut SeededRandom::new(7));
/// let (player, opponent) = deck.deal();
/// assert_eq!(player.len(), 26);
/// assert_eq!(opponent.len(), 26);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        Self { cards: full_deck() }
    }

    pub fn shuffle(&mut self, rng: &mut dyn RandomSource) {
        rng.shuffle(&mut self.cards);
    }

    /// Deals alternately: the 1st, 3rd, 5th... card to the player and the
    /// 2nd, 4th, 6th... to the opponent, consuming the deck.
    pub fn deal(self) -> (VecDeque<Card>, VecDeque<Card>) {
        let half = self.cards.len() / 2;
        let mut player = VecDeque::with_capacity(half);
        let mut opponent = VecDeque::with_capacity(half);
        for (i, c) in self.cards.into_iter().enumerate() {
            if i % 2 == 0 {
                player.push_back(c);
            } else {
                opponent.push_back(c);
            }
        }
        (player, opponent)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
