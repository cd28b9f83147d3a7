//! Deck construction: decks, configuration, cap policy, and builders.
//!
//! ## Key Types
//!
//! - `Deck`: a named sparse mapping from index to card
//! - `DeckConfig`: per-kind quantity caps for configured builds
//! - `CapPolicy` / `OnExceed`: what happens when a draw exceeds its cap
//! - `DeckBuilder`: builds decks from a catalog with injected randomness
//!
//! The `make_*` free functions are the plain entry points; each
//! randomized call seeds a fresh generator from the clock.

pub mod builder;
pub mod deck;
pub mod policy;

pub use builder::{
    make_blank_deck, make_configured_deck, make_randomized_simple_deck, DeckBuilder,
};
pub use deck::{Deck, DeckConfig};
pub use policy::{CapPolicy, OnExceed};
