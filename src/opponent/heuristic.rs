//! The computer's ordered move heuristic.
//!
//! Rules are tried in order and the first one that applies picks the cell:
//!
//! 1. **Win now**: complete an own two-in-a-row.
//! 2. **Block**: fill the gap in an opposing two-in-a-row.
//! 3. **Extend**: play next to the own mark with the most life left.
//! 4. **Random**: any empty cell.
//!
//! Rules 1 and 2 ignore a line when one of its two marks has a lifetime
//! equal to the configured skip threshold (1 for wins, 2 for blocks).

use super::config::HeuristicConfig;
use super::policy::{random_empty_cell, Decision, OpponentPolicy, Rule};
use crate::board::Board;
use crate::core::{GameRng, Side};
use crate::rules::{ADJACENT, LINES};

/// Rule-based opponent.
#[derive(Clone, Debug, Default)]
pub struct HeuristicOpponent {
    config: HeuristicConfig,
}

impl HeuristicOpponent {
    /// Create an opponent with custom thresholds.
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// Get the thresholds.
    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Rule 1: the gap of a line where `me` holds the other two cells.
    #[must_use]
    pub fn winning_move(&self, board: &Board, me: Side) -> Option<usize> {
        completing_cell(board, me, self.config.win_skip_lifetime)
    }

    /// Rule 2: the gap of a line where the opponent holds the other two.
    #[must_use]
    pub fn blocking_move(&self, board: &Board, me: Side) -> Option<usize> {
        completing_cell(board, me.other(), self.config.block_skip_lifetime)
    }

    /// Rule 3: first empty neighbour of `me`'s longest-lived mark.
    ///
    /// Ties go to the lowest index. Only that one mark is considered: if
    /// all its neighbours are taken the rule does not apply.
    #[must_use]
    pub fn extending_move(&self, board: &Board, me: Side) -> Option<usize> {
        let mut best: Option<(usize, u8)> = None;
        for (index, lifetime) in board.occupied_by(me) {
            if best.map_or(true, |(_, l)| lifetime > l) {
                best = Some((index, lifetime));
            }
        }
        let (anchor, _) = best?;
        ADJACENT[anchor].iter().copied().find(|&i| board.is_empty(i))
    }
}

impl OpponentPolicy for HeuristicOpponent {
    fn choose_move(&self, board: &Board, me: Side, rng: &mut GameRng) -> Option<Decision> {
        let decision = if let Some(i) = self.winning_move(board, me) {
            Decision::new(i, Rule::WinNow)
        } else if let Some(i) = self.blocking_move(board, me) {
            Decision::new(i, Rule::Block)
        } else if let Some(i) = self.extending_move(board, me) {
            Decision::new(i, Rule::Extend)
        } else {
            Decision::new(random_empty_cell(board, rng)?, Rule::Random)
        };

        tracing::debug!(side = %me, cell = decision.index, rule = %decision.rule, "opponent decided");
        Some(decision)
    }
}

/// First line (in `LINES` order) with two marks of `side` and an empty
/// third cell, skipping lines where either mark has lifetime `skip`.
fn completing_cell(board: &Board, side: Side, skip: u8) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let mut gap = None;
        let mut owned = 0;
        for &i in line {
            if board.is_empty(i) {
                gap = Some(i);
            } else if board.side_at(i) == Some(side) {
                if board.lifetime_at(i) == skip {
                    return None;
                }
                owned += 1;
            }
        }
        if owned == 2 {
            gap
        } else {
            None
        }
    })
}
