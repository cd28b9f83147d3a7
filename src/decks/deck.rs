//! Decks and build configuration.
//!
//! A deck's card mapping is deliberately sparse: configured builds leave
//! an index absent (a "gap") when a capped Score draw is rejected, and
//! gaps are part of the contract, not an error state.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Selector};

/// A named collection of cards, keyed by index.
///
/// Indices run contiguously from 0 upward except where a configured
/// build left a gap. Iteration order over the mapping is unspecified.
///
/// ## The `size` field
///
/// `size` is captured once, at construction, from the then-empty card
/// mapping - so it reads 0 for every deck the builders produce, no
/// matter how many cards they insert afterwards. Callers have always
/// seen that value and may depend on it, so it is kept as-is. Use
/// [`Deck::card_count`] for the live count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck name, stored verbatim.
    pub name: String,

    /// Sparse index-to-card mapping. An absent key is a gap.
    pub cards: FxHashMap<u32, Card>,

    /// Card count at construction time. Stale; see the type docs.
    pub size: usize,
}

impl Deck {
    /// Create an empty deck. `capacity` pre-sizes the card mapping and
    /// does not affect contents.
    #[must_use]
    pub fn blank(capacity: usize, name: impl Into<String>) -> Self {
        let cards = FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        Self {
            name: name.into(),
            size: cards.len(),
            cards,
        }
    }

    /// Insert a card at an index, replacing any card already there.
    pub fn insert(&mut self, index: u32, card: Card) {
        self.cards.insert(index, card);
    }

    /// Get the card at an index, if the slot is filled.
    #[must_use]
    pub fn card_at(&self, index: u32) -> Option<&Card> {
        self.cards.get(&index)
    }

    /// Check whether an index is a gap (no card present).
    #[must_use]
    pub fn is_gap(&self, index: u32) -> bool {
        !self.cards.contains_key(&index)
    }

    /// Live card count, computed from the mapping. Unlike [`Deck::size`],
    /// this reflects cards inserted after construction.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck currently holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the filled indices, in unspecified order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.cards.keys().copied()
    }
}

/// Per-kind quantity caps for a configured build.
///
/// A cap of 0 means uncapped: add unlimited cards of that kind.
/// Consumed by a single build call; never retained.
///
/// ## Example
///
/// ```
/// use deck_forge::decks::DeckConfig;
///
/// let config = DeckConfig::new(10).with_score_cap(2).with_nerf_cap(3);
/// assert_eq!(config.num_buff_cards, 0); // uncapped
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Number of draw iterations (and the maximum possible deck size).
    pub total_cards: usize,

    /// Cap on Score cards. 0 = uncapped.
    pub num_score_cards: usize,

    /// Cap on Buff cards. 0 = uncapped.
    pub num_buff_cards: usize,

    /// Cap on Nerf cards. 0 = uncapped.
    pub num_nerf_cards: usize,
}

impl DeckConfig {
    /// Create a config with all kinds uncapped.
    #[must_use]
    pub fn new(total_cards: usize) -> Self {
        Self {
            total_cards,
            ..Self::default()
        }
    }

    /// Set the Score card cap.
    #[must_use]
    pub fn with_score_cap(mut self, cap: usize) -> Self {
        self.num_score_cards = cap;
        self
    }

    /// Set the Buff card cap.
    #[must_use]
    pub fn with_buff_cap(mut self, cap: usize) -> Self {
        self.num_buff_cards = cap;
        self
    }

    /// Set the Nerf card cap.
    #[must_use]
    pub fn with_nerf_cap(mut self, cap: usize) -> Self {
        self.num_nerf_cards = cap;
        self
    }

    /// The cap governing a selector's draws. 0 = uncapped.
    #[must_use]
    pub fn cap_for(&self, selector: Selector) -> usize {
        match selector {
            Selector::Score => self.num_score_cards,
            Selector::Heat => self.num_nerf_cards,
            Selector::Buff => self.num_buff_cards,
        }
    }
}
