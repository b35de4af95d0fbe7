//! Win detection, the draw cap, and the decay step.
//!
//! `Rules` is a small value built from `RulesConfig`. The session calls it
//! once per completed turn:
//! - decay every mark
//! - look for a completed line
//! - otherwise check the placement cap

use serde::{Deserialize, Serialize};

use super::lines::{Line, LINES};
use crate::board::{Board, CellIndices};
use crate::core::{RulesConfig, Side};

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// One side completed a line.
    Won(Side),
    /// The placement cap was reached with no line completed.
    Drawn,
}

/// Rule set for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    config: RulesConfig,
}

impl Rules {
    /// Create rules from a (validated) config.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Get the rule constants.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Lifetime given to a freshly placed mark.
    #[must_use]
    pub fn mark_lifetime(&self) -> u8 {
        self.config.mark_lifetime
    }

    /// Apply the decay step. Returns the cells that expired.
    pub fn decay(&self, board: &mut Board) -> CellIndices {
        board.decay_all()
    }

    /// The side owning a completed line, if any.
    #[must_use]
    pub fn check_win(&self, board: &Board) -> Option<Side> {
        winning_line(board).map(|(side, _)| side)
    }

    /// Check if `move_count` placements exhaust the round.
    #[must_use]
    pub fn check_draw(&self, move_count: u32) -> bool {
        move_count >= self.config.draw_threshold
    }

    /// Evaluate a board after the decay step.
    ///
    /// A completed line takes precedence over the draw cap.
    #[must_use]
    pub fn evaluate(&self, board: &Board, move_count: u32) -> Option<RoundResult> {
        if let Some(side) = self.check_win(board) {
            Some(RoundResult::Won(side))
        } else if self.check_draw(move_count) {
            Some(RoundResult::Drawn)
        } else {
            None
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

/// First line, in evaluation order, held entirely by one side.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Side, Line)> {
    LINES.iter().find_map(|&line| {
        let side = board.side_at(line[0])?;
        line[1..]
            .iter()
            .all(|&i| board.side_at(i) == Some(side))
            .then_some((side, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Side)]) -> Board {
        let mut board = Board::new();
        for &(i, side) in marks {
            board.place(i, side, 7).unwrap();
        }
        board
    }

    #[test]
    fn test_every_line_wins() {
        let rules = Rules::default();
        for line in LINES {
            for side in Side::ALL {
                let board = board_with(&line.map(|i| (i, side)));
                assert_eq!(rules.check_win(&board), Some(side), "line {:?}", line);
                assert_eq!(winning_line(&board), Some((side, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let rules = Rules::default();
        let board = board_with(&[(0, Side::First), (1, Side::First), (2, Side::Second)]);
        assert_eq!(rules.check_win(&board), None);
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(Rules::default().check_win(&Board::new()), None);
    }

    #[test]
    fn test_rows_checked_before_columns() {
        // Row 0 and column 0 both belong to X.
        let board = board_with(&[
            (0, Side::First),
            (1, Side::First),
            (2, Side::First),
            (3, Side::First),
            (6, Side::First),
        ]);
        assert_eq!(winning_line(&board), Some((Side::First, [0, 1, 2])));
    }

    #[test]
    fn test_draw_threshold() {
        let rules = Rules::default();
        assert!(!rules.check_draw(0));
        assert!(!rules.check_draw(29));
        assert!(rules.check_draw(30));
        assert!(rules.check_draw(31));
    }

    #[test]
    fn test_custom_draw_threshold() {
        let rules = Rules::new(RulesConfig::default().with_draw_threshold(5));
        assert!(!rules.check_draw(4));
        assert!(rules.check_draw(5));
    }

    #[test]
    fn test_evaluate_prefers_win_over_draw() {
        let rules = Rules::default();
        let board = board_with(&[(2, Side::Second), (4, Side::Second), (6, Side::Second)]);

        assert_eq!(rules.evaluate(&board, 30), Some(RoundResult::Won(Side::Second)));
        assert_eq!(rules.evaluate(&Board::new(), 30), Some(RoundResult::Drawn));
        assert_eq!(rules.evaluate(&Board::new(), 12), None);
    }

    #[test]
    fn test_decay_removes_expired_line() {
        let rules = Rules::default();
        let mut board = Board::new();
        board.place(0, Side::First, 1).unwrap();
        board.place(1, Side::First, 4).unwrap();
        board.place(2, Side::First, 4).unwrap();
        assert_eq!(rules.check_win(&board), Some(Side::First));

        let cleared = rules.decay(&mut board);

        assert_eq!(cleared.as_slice(), &[0]);
        assert_eq!(rules.check_win(&board), None);
    }
}
