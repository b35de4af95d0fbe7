//! Heuristic opponent configuration.

use serde::{Deserialize, Serialize};

/// Lifetime thresholds that disqualify a two-in-a-row.
///
/// A supporting mark whose lifetime equals the threshold makes the line
/// unusable for that rule on this turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Skip a winning completion when a supporting own mark has exactly
    /// this lifetime (default 1: it expires in the decay step that runs
    /// before the win check).
    pub win_skip_lifetime: u8,

    /// Skip a block when a supporting opposing mark has exactly this
    /// lifetime (default 2).
    pub block_skip_lifetime: u8,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            win_skip_lifetime: 1,
            block_skip_lifetime: 2,
        }
    }
}

impl HeuristicConfig {
    /// Set the win-rule skip threshold.
    #[must_use]
    pub fn with_win_skip(mut self, lifetime: u8) -> Self {
        self.win_skip_lifetime = lifetime;
        self
    }

    /// Set the block-rule skip threshold.
    #[must_use]
    pub fn with_block_skip(mut self, lifetime: u8) -> Self {
        self.block_skip_lifetime = lifetime;
        self
    }
}
