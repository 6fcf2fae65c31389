use std::collections::HashSet;

use classwar_engine::cards::{full_deck, Card};
use classwar_engine::deck::{Deck, DECK_SIZE};
use classwar_engine::engine::RoundEngine;
use classwar_engine::game::Side;
use classwar_engine::rng::SeededRandom;

#[test]
fn deal_splits_full_deck_evenly() {
    let mut deck = Deck::standard();
    deck.shuffle(&mut SeededRandom::new(42));
    let (p, o) = deck.deal();
    assert_eq!(p.len(), 26);
    assert_eq!(o.len(), 26);

    let mut set = HashSet::new();
    for c in p.iter().chain(o.iter()) {
        assert!(set.insert(*c), "card {} dealt twice", c);
    }
    let all: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(set, all);
}

#[test]
fn start_deals_26_each_with_no_duplicates() {
    let mut eng = RoundEngine::with_seed(Some(9));
    eng.start();
    let p = eng.sequence(Side::Player);
    let o = eng.sequence(Side::Opponent);
    assert_eq!(p.len(), 26);
    assert_eq!(o.len(), 26);
    let union: HashSet<Card> = p.iter().chain(o.iter()).copied().collect();
    assert_eq!(union.len(), DECK_SIZE);
    assert!(eng.pot().is_empty());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::standard();
    let mut d2 = Deck::standard();
    d1.shuffle(&mut SeededRandom::new(12345));
    d2.shuffle(&mut SeededRandom::new(12345));
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::standard();
    let mut d2 = Deck::standard();
    d1.shuffle(&mut SeededRandom::new(1));
    d2.shuffle(&mut SeededRandom::new(2));
    assert_ne!(
        d1.cards()[..10],
        d2.cards()[..10],
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn consecutive_starts_deal_different_games() {
    let mut eng = RoundEngine::with_seed(Some(5));
    eng.start();
    let first: Vec<Card> = eng.sequence(Side::Player).iter().copied().collect();
    eng.start();
    let second: Vec<Card> = eng.sequence(Side::Player).iter().copied().collect();
    assert_ne!(first, second);
}
