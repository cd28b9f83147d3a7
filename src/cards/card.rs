//! Card data: kinds and immutable card values.
//!
//! A `Card` is pure data. The builders copy prototypes out of the
//! [`Catalog`](super::Catalog) into decks; nothing ever writes back.

use serde::{Deserialize, Serialize};

/// What kind of card this is.
///
/// Discriminants are fixed (Nerf = 0, Buff = 1, Score = 2); keep them
/// stable if decks are ever persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Hurts the holder (negative value cards like Heat).
    Nerf = 0,
    /// Helps the holder.
    Buff = 1,
    /// Worth points at scoring time.
    Score = 2,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Nerf => write!(f, "Nerf"),
            CardKind::Buff => write!(f, "Buff"),
            CardKind::Score => write!(f, "Score"),
        }
    }
}

/// Immutable card value.
///
/// ## Example
///
/// ```
/// use deck_forge::cards::{Card, CardKind};
///
/// let heat = Card::basic_heat();
/// assert_eq!(heat.kind, CardKind::Nerf);
/// assert_eq!(heat.value, -5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Kind of card.
    pub kind: CardKind,

    /// Card name (for display/debugging).
    pub name: String,

    /// Point value. May be negative (Heat is -5).
    pub value: i64,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(kind: CardKind, name: impl Into<String>, value: i64) -> Self {
        Self {
            kind,
            name: name.into(),
            value,
        }
    }

    /// The most basic type of score card.
    #[must_use]
    pub fn basic_score() -> Self {
        Self::new(CardKind::Score, "Score", 1)
    }

    /// A basic type of heat card.
    #[must_use]
    pub fn basic_heat() -> Self {
        Self::new(CardKind::Nerf, "Heat", -5)
    }

    /// A basic type of buff card.
    #[must_use]
    pub fn basic_buff() -> Self {
        Self::new(CardKind::Buff, "Buff", 0)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.value)
    }
}
