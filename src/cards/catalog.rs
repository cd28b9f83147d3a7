//! Catalog of card prototypes.
//!
//! The `Catalog` stores the prototypes available to the deck builders
//! and maps uniform random draws ([`Selector`]) onto them. The standard
//! catalog carries exactly three entries, in draw order: Score, Heat,
//! Buff.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind};
use crate::core::DeckRng;

/// Outcome of a uniform random draw over the catalog.
///
/// The draw order is fixed: 0 = Score, 1 = Heat (the Nerf-kind
/// prototype), 2 = Buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selector {
    /// Selector 0: the Score prototype.
    Score,
    /// Selector 1: the Heat prototype (kind Nerf).
    Heat,
    /// Selector 2: the Buff prototype.
    Buff,
}

impl Selector {
    /// Number of catalog slots.
    pub const COUNT: usize = 3;

    /// All selectors in draw order.
    pub const ALL: [Selector; Self::COUNT] = [Selector::Score, Selector::Heat, Selector::Buff];

    /// Position of this selector in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Selector::Score => 0,
            Selector::Heat => 1,
            Selector::Buff => 2,
        }
    }

    /// The card kind this selector produces.
    #[must_use]
    pub const fn kind(self) -> CardKind {
        match self {
            Selector::Score => CardKind::Score,
            Selector::Heat => CardKind::Nerf,
            Selector::Buff => CardKind::Buff,
        }
    }

    /// Draw a uniformly random selector.
    #[must_use]
    pub fn draw(rng: &mut DeckRng) -> Self {
        match rng.gen_range_usize(0..Self::COUNT) {
            0 => Selector::Score,
            1 => Selector::Heat,
            _ => Selector::Buff,
        }
    }
}

/// The fixed set of card prototypes decks are built from.
///
/// Immutable after construction. Builder calls copy prototypes out of
/// the catalog; they never write back into it.
///
/// ## Example
///
/// ```
/// use deck_forge::cards::{Catalog, CardKind, Selector};
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.prototype(Selector::Heat).kind, CardKind::Nerf);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    prototypes: [Card; Selector::COUNT],
}

impl Catalog {
    /// The standard three-card catalog: Score, Heat, Buff.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([Card::basic_score(), Card::basic_heat(), Card::basic_buff()])
    }

    /// Build a catalog from custom prototypes, in draw order.
    #[must_use]
    pub fn new(prototypes: [Card; Selector::COUNT]) -> Self {
        Self { prototypes }
    }

    /// Get the prototype for a selector.
    #[must_use]
    pub fn prototype(&self, selector: Selector) -> &Card {
        &self.prototypes[selector.index()]
    }

    /// Find the first prototype of the given kind.
    #[must_use]
    pub fn by_kind(&self, kind: CardKind) -> Option<&Card> {
        self.prototypes.iter().find(|c| c.kind == kind)
    }

    /// Number of prototypes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    /// Check if the catalog is empty. (The fixed-size catalog never is,
    /// but the accessor pairs with `len` by convention.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }

    /// Iterate over prototypes in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.prototypes.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
