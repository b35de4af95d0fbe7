//! Opponent policies.
//!
//! Policies are trait-based so a session can swap the computer's brain:
//! - `HeuristicOpponent`: the ordered win / block / extend / random rules
//! - `UniformOpponent`: uniformly random empty cell

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRng, Side};

/// Which rule produced a computer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Completed an own two-in-a-row.
    WinNow,
    /// Filled the gap in an opposing two-in-a-row.
    Block,
    /// Played next to the own mark with the most life left.
    Extend,
    /// Picked an empty cell at random.
    Random,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::WinNow => write!(f, "win"),
            Rule::Block => write!(f, "block"),
            Rule::Extend => write!(f, "extend"),
            Rule::Random => write!(f, "random"),
        }
    }
}

/// A chosen cell and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub index: usize,
    pub rule: Rule,
}

impl Decision {
    #[must_use]
    pub const fn new(index: usize, rule: Rule) -> Self {
        Self { index, rule }
    }
}

/// Policy for choosing the computer's placement.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a cell for `me` on the current board.
    ///
    /// Returns `None` only if no cell is empty. Any returned index must be
    /// empty on `board`.
    fn choose_move(&self, board: &Board, me: Side, rng: &mut GameRng) -> Option<Decision>;
}

/// Uniform random opponent policy.
///
/// Selects uniformly from empty cells.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, board: &Board, _me: Side, rng: &mut GameRng) -> Option<Decision> {
        random_empty_cell(board, rng).map(|i| Decision::new(i, Rule::Random))
    }
}

/// Pick an empty cell uniformly at random.
pub(crate) fn random_empty_cell(board: &Board, rng: &mut GameRng) -> Option<usize> {
    let empty = board.empty_cells();
    rng.choose(&empty).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_picks_empty_cell() {
        let mut board = Board::new();
        for i in [0, 1, 2, 3, 5, 6, 7, 8] {
            board.place(i, Side::First, 7).unwrap();
        }
        let mut rng = GameRng::new(42);

        let decision = UniformOpponent.choose_move(&board, Side::Second, &mut rng);
        assert_eq!(decision, Some(Decision::new(4, Rule::Random)));
    }

    #[test]
    fn test_uniform_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            board.place(i, Side::First, 7).unwrap();
        }
        let mut rng = GameRng::new(42);

        assert_eq!(UniformOpponent.choose_move(&board, Side::Second, &mut rng), None);
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::WinNow.to_string(), "win");
        assert_eq!(Rule::Random.to_string(), "random");
    }
}
