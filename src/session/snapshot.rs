//! Round state and read-only session snapshots.
//!
//! ## RoundState
//!
//! ```text
//! InProgress(side) ──placement──▶ InProgress(other) | Won(side) | Drawn
//! ```
//!
//! `Won` and `Drawn` are terminal; only a reset starts the next round.
//!
//! ## Snapshot
//!
//! Everything a renderer needs, detached from the session. Snapshots are
//! cheap to take: the move history is a persistent `im::Vector`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::MoveRecord;
use crate::board::{Cell, CELL_COUNT};
use crate::core::{GameMode, Side, SideMap};
use crate::rules::RoundResult;

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for `to_move` to place a mark.
    InProgress { to_move: Side },
    /// `Side` completed a line.
    Won(Side),
    /// The placement cap was reached.
    Drawn,
}

impl RoundState {
    /// Returns `true` while placements are accepted.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    /// The finished round's result, if the round is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        match self {
            Self::InProgress { .. } => None,
            Self::Won(side) => Some(RoundResult::Won(*side)),
            Self::Drawn => Some(RoundResult::Drawn),
        }
    }
}

impl From<RoundResult> for RoundState {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::Won(side) => Self::Won(side),
            RoundResult::Drawn => Self::Drawn,
        }
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InProgress { to_move } => write!(f, "{} to move", to_move),
            Self::Won(side) => write!(f, "{} wins", side),
            Self::Drawn => write!(f, "draw"),
        }
    }
}

/// Full view of a session at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Who controls each side.
    pub mode: GameMode,

    /// The nine cells, row-major.
    pub cells: [Cell; CELL_COUNT],

    /// Placements made in the current round.
    pub move_count: u32,

    /// Side whose turn it is (the last mover once the round is over).
    pub current_side: Side,

    /// Side that opened the current round.
    pub starting_side: Side,

    /// Round wins per side.
    pub scores: SideMap<u8>,

    /// Current round state.
    pub round: RoundState,

    /// Set once a side has won the match.
    pub match_winner: Option<Side>,

    /// Placements of the current round, oldest first.
    pub history: Vector<MoveRecord>,
}

impl Snapshot {
    /// Get a cell, or `None` if `index` is off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns `true` once the match is decided.
    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.match_winner.is_some()
    }
}
