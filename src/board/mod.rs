//! Board of decaying marks.
//!
//! ## Key Types
//!
//! - `Cell`: empty, or a side's mark with its remaining lifetime
//! - `Board`: the nine cells, placement and the decay step
//!
//! The board only knows about cells. Turn order, scoring and which side
//! may move are the session's business.

pub mod cell;
pub mod grid;

pub use cell::Cell;
pub use grid::{Board, CellIndices, CELL_COUNT, GRID_SIZE};
