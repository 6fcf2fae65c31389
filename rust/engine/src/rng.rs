use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::Card;

/// Randomness the engine needs from its host: a uniform shuffle for dealing
/// and a uniform pick for item awards.
pub trait RandomSource {
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Uniform index in `0..n`. `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

/// Default source backed by ChaCha20, seeded once so a whole game can be
/// replayed from its seed.
///
/// ```
/// use classwar_engine::cards::full_deck;
/// use classwar_engine::rng::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::new(42);
/// let mut b = SeededRandom::new(42);
/// let mut d1 = full_deck();
/// let mut d2 = full_deck();
/// a.shuffle(&mut d1);
/// b.shuffle(&mut d2);
/// assert_eq!(d1, d2);
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: ChaCha20Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn pick(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}
