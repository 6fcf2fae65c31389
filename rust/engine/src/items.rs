use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment awarded to the winner of a war.
/// The modifier is added to every card value the owning side reveals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Display name
    pub name: String,
    /// Flat bonus applied to the effective value of revealed cards
    pub modifier: i32,
    /// Flavor text
    pub description: String,
}

/// Template entry in the fixed item catalog.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub modifier: i32,
    pub description: &'static str,
}

impl ItemTemplate {
    /// Owned copy of the template, independent of the catalog.
    pub fn instantiate(&self) -> Item {
        Item {
            name: self.name.to_string(),
            modifier: self.modifier,
            description: self.description.to_string(),
        }
    }
}

pub const CATALOG: [ItemTemplate; 6] = [
    ItemTemplate {
        name: "Iron Sword",
        modifier: 2,
        description: "A plain but reliable blade.",
    },
    ItemTemplate {
        name: "Shadow Cloak",
        modifier: 1,
        description: "Hard to hit what you cannot see.",
    },
    ItemTemplate {
        name: "Arcane Staff",
        modifier: 3,
        description: "Hums with barely contained power.",
    },
    ItemTemplate {
        name: "Dragon Scale",
        modifier: 4,
        description: "Armor cut from a fallen wyrm.",
    },
    ItemTemplate {
        name: "Lucky Charm",
        modifier: 1,
        description: "Fortune favours the superstitious.",
    },
    ItemTemplate {
        name: "Battle Standard",
        modifier: 2,
        description: "Rallies every card in the deck.",
    },
];

/// Instantiates catalog entry `index`, wrapping out-of-range indices.
pub fn catalog_item(index: usize) -> Item {
    CATALOG[index % CATALOG.len()].instantiate()
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.name, self.modifier)
    }
}
