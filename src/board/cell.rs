//! A single board cell.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Contents of one cell.
///
/// An occupied cell carries the number of turns its mark has left. The
/// lifetime of an occupied cell is never 0: a mark is removed on the same
/// decay step that would bring it to 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { side: Side, lifetime: u8 },
}

impl Cell {
    /// Check if the cell holds no mark.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The side owning the mark, if any.
    #[must_use]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { side, .. } => Some(*side),
        }
    }

    /// Remaining lifetime; 0 for an empty cell.
    #[must_use]
    pub const fn lifetime(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied { lifetime, .. } => *lifetime,
        }
    }

    /// Check if the cell holds a mark of `side`.
    #[must_use]
    pub fn is_owned_by(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// Apply one decay step. Returns true if the mark expired.
    pub(crate) fn decay(&mut self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Occupied { lifetime, .. } => {
                *lifetime = lifetime.saturating_sub(1);
                if *lifetime == 0 {
                    *self = Cell::Empty;
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied { side, lifetime } => write!(f, "{}{}", side, lifetime),
        }
    }
}
