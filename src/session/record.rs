//! Move records and per-call turn outcomes.
//!
//! A `MoveRecord` is kept in the round's history for every placement.
//! A `TurnOutcome` is what one placement request returns: the moves it
//! caused (the request plus any computer reply), the cells they touched,
//! and where the round and match stand afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::snapshot::RoundState;
use crate::core::{Side, SideMap};
use crate::opponent::Rule;

/// Where a move came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    Human,
    Computer(Rule),
}

/// One placement in the round's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Placement number within the round (1-based).
    pub number: u32,

    /// The side that placed the mark.
    pub side: Side,

    /// The cell it was placed on.
    pub index: usize,

    /// Human request or computer rule.
    pub source: MoveSource,
}

/// A cell touched during a turn, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellChange {
    /// A mark was placed with its full lifetime.
    Placed { index: usize, side: Side, lifetime: u8 },
    /// A mark's lifetime ran out and the cell is empty again.
    Expired { index: usize },
}

/// Result of a placement request (or a deferred computer move).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Moves applied during the call; the computer's reply, if any, last.
    pub moves: SmallVec<[MoveRecord; 2]>,

    /// Placements and expiries, in order.
    pub changes: SmallVec<[CellChange; 8]>,

    /// Placements made in the round so far.
    pub move_count: u32,

    /// Round state after the call.
    pub round: RoundState,

    /// Scores after the call.
    pub scores: SideMap<u8>,

    /// Set once a side has won the match.
    pub match_winner: Option<Side>,
}

impl TurnOutcome {
    /// Cells that expired during the call.
    pub fn expired(&self) -> impl Iterator<Item = usize> + '_ {
        self.changes.iter().filter_map(|c| match c {
            CellChange::Expired { index } => Some(*index),
            CellChange::Placed { .. } => None,
        })
    }

    /// The computer's reply, if it moved during the call.
    #[must_use]
    pub fn computer_move(&self) -> Option<&MoveRecord> {
        self.moves
            .iter()
            .find(|m| matches!(m.source, MoveSource::Computer(_)))
    }
}
