//! Core building blocks shared by the deck builders.
//!
//! Currently just the RNG. The deck builders never touch a process-wide
//! random source; randomness always flows in as a [`DeckRng`] value.

pub mod rng;

pub use rng::{DeckRng, DeckRngState};
