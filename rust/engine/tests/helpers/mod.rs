#![allow(dead_code)]

use classwar_engine::cards::{full_deck, Card, Rank, Suit};
use classwar_engine::rng::RandomSource;

/// Random source with a fixed item script and an identity shuffle.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn pick(&mut self, n: usize) -> usize {
        let v = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        v % n
    }
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(suit, rank)
}

fn rest_of_deck(taken: &[Card]) -> Vec<Card> {
    full_deck()
        .into_iter()
        .filter(|c| !taken.contains(c))
        .collect()
}

/// Full deck with the given cards on top of each pile; the remaining cards
/// are split alternately behind them.
pub fn arranged(player: &[Card], opponent: &[Card]) -> (Vec<Card>, Vec<Card>) {
    let taken: Vec<Card> = player.iter().chain(opponent).copied().collect();
    let mut p = player.to_vec();
    let mut o = opponent.to_vec();
    for (i, c) in rest_of_deck(&taken).into_iter().enumerate() {
        if i % 2 == 0 {
            p.push(c);
        } else {
            o.push(c);
        }
    }
    (p, o)
}

/// The player holds exactly `player`; the opponent holds `opponent` on top
/// followed by every other card.
pub fn short_stack(player: &[Card], opponent: &[Card]) -> (Vec<Card>, Vec<Card>) {
    let taken: Vec<Card> = player.iter().chain(opponent).copied().collect();
    let mut o = opponent.to_vec();
    o.extend(rest_of_deck(&taken));
    (player.to_vec(), o)
}
