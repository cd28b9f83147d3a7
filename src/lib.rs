//! # deck-forge
//!
//! Deck construction for a simple card game. The crate holds a fixed
//! catalog of three card prototypes (Score, Heat, Buff) and builds decks
//! from it three ways: blank, fully randomized, or randomized under
//! per-kind quantity caps.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: No builder can fail. Degenerate inputs
//!    (zero counts, unsatisfiable caps) resolve by silent policy -
//!    empty decks, gaps, or fallback substitution - never by error.
//!
//! 2. **Injectable randomness**: [`DeckBuilder`] takes an explicit
//!    [`DeckRng`] so tests can fix a seed. The `make_*` free functions
//!    seed from the clock on every call instead.
//!
//! 3. **Visible policy**: the cap behavior of configured builds (Score
//!    draws skip when capped, Nerf/Buff draws substitute a Score card)
//!    is a per-selector [`CapPolicy`] table, not hidden branch logic.
//!
//! ## Modules
//!
//! - `core`: deterministic, serializable RNG
//! - `cards`: card kinds, prototypes, and the fixed catalog
//! - `decks`: decks, build configuration, cap policy, builders

pub mod cards;
pub mod core;
pub mod decks;

// Re-export commonly used types
pub use crate::core::{DeckRng, DeckRngState};

pub use crate::cards::{Card, CardKind, Catalog, Selector};

pub use crate::decks::{
    make_blank_deck, make_configured_deck, make_randomized_simple_deck, CapPolicy, Deck,
    DeckBuilder, DeckConfig, OnExceed,
};
