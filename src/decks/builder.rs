//! Deck builders.
//!
//! [`DeckBuilder`] holds a catalog reference, a cap policy, and its own
//! [`DeckRng`], so randomness is explicit and a fixed seed reproduces a
//! build exactly. The `make_*` free functions wrap it for callers who
//! just want a deck: a fresh clock-seeded generator per call.
//!
//! All builders are total. Zero counts yield empty decks; exhausted caps
//! resolve through the [`CapPolicy`] table (gap or substitution), never
//! through an error.

use crate::cards::{Catalog, Selector};
use crate::core::DeckRng;

use super::deck::{Deck, DeckConfig};
use super::policy::{CapPolicy, OnExceed};

/// Builds decks from a catalog with injected randomness.
///
/// ## Example
///
/// ```
/// use deck_forge::{Catalog, DeckBuilder, DeckRng};
///
/// let catalog = Catalog::standard();
/// let mut builder = DeckBuilder::new(&catalog, DeckRng::new(42));
///
/// let deck = builder.randomized_simple(5, "opening hand");
/// assert_eq!(deck.card_count(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder<'a> {
    catalog: &'a Catalog,
    policy: CapPolicy,
    rng: DeckRng,
}

impl<'a> DeckBuilder<'a> {
    /// Create a builder over a catalog with the standard cap policy.
    #[must_use]
    pub fn new(catalog: &'a Catalog, rng: DeckRng) -> Self {
        Self {
            catalog,
            policy: CapPolicy::standard(),
            rng,
        }
    }

    /// Replace the cap policy (builder pattern).
    #[must_use]
    pub fn with_policy(mut self, policy: CapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Make a blank deck. `count` pre-sizes the card mapping only.
    #[must_use]
    pub fn blank(&self, count: usize, name: impl Into<String>) -> Deck {
        Deck::blank(count, name)
    }

    /// Make a deck of `count` uniformly random catalog cards at
    /// indices `0..count`.
    pub fn randomized_simple(&mut self, count: usize, name: impl Into<String>) -> Deck {
        let mut deck = Deck::blank(count, name);
        for i in 0..count {
            let selector = Selector::draw(&mut self.rng);
            deck.insert(i as u32, self.catalog.prototype(selector).clone());
        }
        deck
    }

    /// Make a deck conforming to the supplied config.
    ///
    /// Each of the `total_cards` iterations draws a selector. Under-cap
    /// (or uncapped) draws insert that selector's prototype and count it;
    /// over-cap draws resolve through the policy table, and a substituted
    /// card counts against no cap. The resulting mapping holds anywhere
    /// from 0 to `total_cards` cards, with gaps where Score draws were
    /// rejected.
    pub fn configured(&mut self, config: DeckConfig, name: impl Into<String>) -> Deck {
        let mut deck = Deck::blank(config.total_cards, name);
        let mut added = [0usize; Selector::COUNT];

        for i in 0..config.total_cards {
            let selector = Selector::draw(&mut self.rng);
            let cap = config.cap_for(selector);

            if added[selector.index()] < cap || cap == 0 {
                deck.insert(i as u32, self.catalog.prototype(selector).clone());
                added[selector.index()] += 1;
            } else {
                match self.policy.on_exceed(selector) {
                    OnExceed::Skip => {} // leave a gap at index i
                    OnExceed::Substitute(fallback) => {
                        deck.insert(i as u32, self.catalog.prototype(fallback).clone());
                    }
                }
            }
        }
        deck
    }

    /// The catalog this builder draws from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// The cap policy in effect.
    #[must_use]
    pub fn policy(&self) -> CapPolicy {
        self.policy
    }
}

/// Make a blank deck over the standard catalog.
#[must_use]
pub fn make_blank_deck(count: usize, name: impl Into<String>) -> Deck {
    Deck::blank(count, name)
}

/// Make a deck of `count` uniformly random cards from the standard
/// catalog, seeding a fresh generator from the clock.
#[must_use]
pub fn make_randomized_simple_deck(count: usize, name: impl Into<String>) -> Deck {
    let catalog = Catalog::standard();
    DeckBuilder::new(&catalog, DeckRng::from_time()).randomized_simple(count, name)
}

/// Make a deck conforming to the supplied config from the standard
/// catalog, seeding a fresh generator from the clock.
#[must_use]
pub fn make_configured_deck(config: DeckConfig, name: impl Into<String>) -> Deck {
    let catalog = Catalog::standard();
    DeckBuilder::new(&catalog, DeckRng::from_time()).configured(config, name)
}
