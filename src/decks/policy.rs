//! Cap policy for configured builds.
//!
//! Configured builds treat cap overflow asymmetrically: a Score draw
//! past its cap inserts nothing (a gap), while Nerf and Buff draws past
//! their caps insert a Score card instead. `CapPolicy` keeps that
//! asymmetry as an explicit per-selector table so callers can inspect
//! and test it rather than rediscover it in branch logic.

use serde::{Deserialize, Serialize};

use crate::cards::Selector;

/// What a configured build does with a draw whose cap is exhausted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnExceed {
    /// Insert nothing; the index stays absent from the mapping.
    Skip,
    /// Insert the named selector's prototype instead. The substitute
    /// does not count against any cap.
    Substitute(Selector),
}

/// Per-selector cap-exceeded policy table.
///
/// The standard table is `{ Score: Skip, Heat: Substitute(Score),
/// Buff: Substitute(Score) }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapPolicy {
    table: [OnExceed; Selector::COUNT],
}

impl CapPolicy {
    /// The standard policy: Score skips, Heat and Buff fall back to Score.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = [OnExceed::Substitute(Selector::Score); Selector::COUNT];
        table[Selector::Score.index()] = OnExceed::Skip;
        Self { table }
    }

    /// Build a policy from an explicit table, indexed in draw order.
    #[must_use]
    pub fn new(table: [OnExceed; Selector::COUNT]) -> Self {
        Self { table }
    }

    /// What to do when `selector`'s cap is exhausted.
    #[must_use]
    pub fn on_exceed(&self, selector: Selector) -> OnExceed {
        self.table[selector.index()]
    }
}

impl Default for CapPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
