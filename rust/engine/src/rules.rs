use std::cmp::Ordering;

use crate::cards::Card;
use crate::game::Side;
use crate::items::Item;

/// Bonus for revealing a class that beats the other side's class.
pub const CLASS_BONUS: i32 = 3;

/// Computes the effective value of `own` when revealed against `other`.
///
/// The value is the rank value, plus [`CLASS_BONUS`] when `own`'s class beats
/// `other`'s class, plus the modifier of the equipped item if any.
///
/// # Examples
///
/// ```
/// use classwar_engine::cards::{Card, Rank, Suit};
/// use classwar_engine::rules::effective_value;
///
/// // Clubs are Warriors, Diamonds are Thieves: Warrior beats Thief.
/// let ace = Card::new(Suit::Clubs, Rank::Ace);
/// let ten = Card::new(Suit::Diamonds, Rank::Ten);
/// assert_eq!(effective_value(&ace, &ten, None), 17);
/// assert_eq!(effective_value(&ten, &ace, None), 10);
/// ```
pub fn effective_value(own: &Card, other: &Card, item: Option<&Item>) -> i32 {
    let bonus = if own.class.beats(other.class) {
        CLASS_BONUS
    } else {
        0
    };
    own.value() + bonus + item.map_or(0, |i| i.modifier)
}

/// Effective values of both revealed cards, player first.
pub fn effective_values(
    player: &Card,
    opponent: &Card,
    player_item: Option<&Item>,
    opponent_item: Option<&Item>,
) -> (i32, i32) {
    (
        effective_value(player, opponent, player_item),
        effective_value(opponent, player, opponent_item),
    )
}

/// Winner of a regular round, or `None` on a tie (which escalates to war).
pub fn round_winner(player_value: i32, opponent_value: i32) -> Option<Side> {
    match player_value.cmp(&opponent_value) {
        Ordering::Greater => Some(Side::Player),
        Ordering::Less => Some(Side::Opponent),
        Ordering::Equal => None,
    }
}

/// Winner of a war. Equal values go to the player.
///
/// ```
/// use classwar_engine::game::Side;
/// use classwar_engine::rules::war_winner;
///
/// assert_eq!(war_winner(9, 9), Side::Player);
/// assert_eq!(war_winner(8, 9), Side::Opponent);
/// ```
pub fn war_winner(player_value: i32, opponent_value: i32) -> Side {
    round_winner(player_value, opponent_value).unwrap_or(Side::Player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::items::catalog_item;

    #[test]
    fn same_class_gets_no_bonus() {
        let a = Card::new(Suit::Clubs, Rank::Five);
        let b = Card::new(Suit::Spades, Rank::Five);
        assert_eq!(effective_values(&a, &b, None, None), (5, 5));
    }

    #[test]
    fn mage_beats_warrior() {
        let mage = Card::new(Suit::Hearts, Rank::Two);
        let warrior = Card::new(Suit::Spades, Rank::Four);
        assert_eq!(effective_values(&mage, &warrior, None, None), (5, 4));
    }

    #[test]
    fn item_modifier_adds_on_top_of_class_bonus() {
        let thief = Card::new(Suit::Diamonds, Rank::Seven);
        let mage = Card::new(Suit::Hearts, Rank::Seven);
        let staff = catalog_item(2);
        assert_eq!(effective_value(&thief, &mage, Some(&staff)), 7 + 3 + 3);
        assert_eq!(effective_value(&mage, &thief, Some(&staff)), 7 + 3);
    }

    #[test]
    fn round_tie_has_no_winner() {
        assert_eq!(round_winner(10, 10), None);
        assert_eq!(round_winner(11, 10), Some(Side::Player));
        assert_eq!(round_winner(10, 11), Some(Side::Opponent));
    }
}
