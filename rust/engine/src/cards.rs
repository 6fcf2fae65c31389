use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four suits in the 52-card deck.
/// The suit also decides a card's [`CardClass`] (see [`Suit::class`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Class assigned by cycling through the suits in deck order:
    /// Warrior, Thief, Mage, then back to Warrior.
    pub fn class(self) -> CardClass {
        match self {
            Suit::Clubs => CardClass::Warrior,
            Suit::Diamonds => CardClass::Thief,
            Suit::Hearts => CardClass::Mage,
            Suit::Spades => CardClass::Warrior,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Face value of a card from Two through Ace.
/// The discriminant is the numeric value used in combat (2-14).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// RPG class carried by every card. Classes form a rock-paper-scissors cycle:
/// Warrior beats Thief, Thief beats Mage, Mage beats Warrior.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    Warrior,
    Thief,
    Mage,
}

impl CardClass {
    pub fn beats(self, other: CardClass) -> bool {
        matches!(
            (self, other),
            (CardClass::Warrior, CardClass::Thief)
                | (CardClass::Thief, CardClass::Mage)
                | (CardClass::Mage, CardClass::Warrior)
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            CardClass::Warrior => "Warrior",
            CardClass::Thief => "Thief",
            CardClass::Mage => "Mage",
        }
    }
}

/// A single card: suit, rank and the class derived from the suit.
/// Cards are plain values; the engine moves them between the two sequences and the pot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// Combat class, fixed at creation
    pub class: CardClass,
}

impl Card {
    /// Builds a card with the class its suit dictates.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            class: suit.class(),
        }
    }

    pub fn value(&self) -> i32 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} ({})",
            self.rank.label(),
            self.suit.symbol(),
            self.class.name()
        )
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_span_two_to_fourteen() {
        let values: Vec<i32> = all_ranks().iter().map(|r| r.value()).collect();
        assert_eq!(values.first(), Some(&2));
        assert_eq!(values.last(), Some(&14));
        assert!(values.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn class_cycle_is_one_directional() {
        use CardClass::*;
        assert!(Warrior.beats(Thief));
        assert!(Thief.beats(Mage));
        assert!(Mage.beats(Warrior));
        assert!(!Thief.beats(Warrior));
        assert!(!Mage.beats(Thief));
        assert!(!Warrior.beats(Mage));
        for c in [Warrior, Thief, Mage] {
            assert!(!c.beats(c), "{:?} must not beat itself", c);
        }
    }

    #[test]
    fn suits_cycle_through_classes() {
        assert_eq!(Suit::Clubs.class(), CardClass::Warrior);
        assert_eq!(Suit::Diamonds.class(), CardClass::Thief);
        assert_eq!(Suit::Hearts.class(), CardClass::Mage);
        assert_eq!(Suit::Spades.class(), CardClass::Warrior);
    }

    #[test]
    fn full_deck_assigns_class_from_suit() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        assert!(deck.iter().all(|c| c.class == c.suit.class()));
        let warriors = deck
            .iter()
            .filter(|c| c.class == CardClass::Warrior)
            .count();
        assert_eq!(warriors, 26);
    }

    #[test]
    fn display_shows_rank_suit_and_class() {
        let c = Card::new(Suit::Hearts, Rank::Queen);
        assert_eq!(c.to_string(), "Q♥ (Mage)");
    }
}
