use serde::{Deserialize, Serialize};

/// Health every player starts with.
pub const STARTING_HEALTH: i32 = 100;

/// A single trading-card record as returned by the card provider.
///
/// All fields default to the empty string: the provider omits `power` and
/// `toughness` for non-creature cards, and a missing key must not fail
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub toughness: String,
}

/// A named player holding a hand of cards.
///
/// The hand is only mutated during construction by the dealer; once a `Player`
/// value exists it is never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub health: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
            health: STARTING_HEALTH,
        }
    }
}
