//! The 3×3 grid of decaying marks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::{MoveError, Side};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Width (and height) of the board.
pub const GRID_SIZE: usize = 3;

/// Cell indices, at most one per cell, without heap allocation.
pub type CellIndices = SmallVec<[usize; CELL_COUNT]>;

/// Nine cells in row-major order.
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
///
/// ## Usage
///
/// ```
/// use decay_tac_toe::board::{Board, Cell};
/// use decay_tac_toe::core::Side;
///
/// let mut board = Board::new();
/// board.place(4, Side::First, 2).unwrap();
///
/// assert!(board.decay_all().is_empty());
/// assert_eq!(board.cell(4), Some(Cell::Occupied { side: Side::First, lifetime: 1 }));
///
/// assert_eq!(board.decay_all().as_slice(), &[4]);
/// assert!(board.is_empty(4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board with the given contents.
    #[must_use]
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get a cell, or `None` if `index` is off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// The side holding `index`, or `None` if it is empty or off the board.
    #[must_use]
    pub fn side_at(&self, index: usize) -> Option<Side> {
        self.cell(index).and_then(|c| c.side())
    }

    /// Remaining lifetime of the mark at `index` (0 when empty).
    #[must_use]
    pub fn lifetime_at(&self, index: usize) -> u8 {
        self.cell(index).map_or(0, |c| c.lifetime())
    }

    /// Check if `index` is on the board and empty.
    #[must_use]
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Cell::Empty))
    }

    /// Indices of all empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> CellIndices {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty()).collect()
    }

    /// Indices and lifetimes of every mark held by `side`, ascending.
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.is_owned_by(side))
            .map(|(i, c)| (i, c.lifetime()))
    }

    /// Count of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Place a mark of `side` with the given lifetime.
    ///
    /// Fails without touching the board if `index` is off the board or the
    /// cell is taken.
    pub fn place(&mut self, index: usize, side: Side, lifetime: u8) -> Result<Cell, MoveError> {
        let slot = self.cells.get_mut(index).ok_or(MoveError::OutOfRange(index))?;
        if !slot.is_empty() {
            return Err(MoveError::Occupied(index));
        }
        *slot = Cell::Occupied { side, lifetime };
        Ok(*slot)
    }

    /// Decrement every mark's lifetime, clearing those that reach 0.
    ///
    /// Returns the indices that became empty.
    pub fn decay_all(&mut self) -> CellIndices {
        self.cells
            .iter_mut()
            .enumerate()
            .filter_map(|(i, cell)| cell.decay().then_some(i))
            .collect()
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(GRID_SIZE) {
            let line: Vec<String> = row.iter().map(|c| format!("{:>2}", c.to_string())).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
