//! Card system: kinds, prototypes, and the fixed catalog.
//!
//! ## Key Types
//!
//! - `CardKind`: the three kinds a card can have (Nerf, Buff, Score)
//! - `Card`: immutable card data (kind, name, value)
//! - `Selector`: outcome of a uniform random draw over the catalog
//! - `Catalog`: the fixed prototype set the builders copy cards from
//!
//! Decks own their cards by value. The catalog prototypes are never
//! mutated by any builder call; decks receive clones.

pub mod card;
pub mod catalog;

pub use card::{Card, CardKind};
pub use catalog::{Catalog, Selector};
