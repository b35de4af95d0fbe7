//! Rules: winning lines, the draw cap, and the decay step.
//!
//! The session calls into `Rules` after every placement; the rules never
//! decide whose turn it is.

pub mod engine;
pub mod lines;

pub use engine::{winning_line, RoundResult, Rules};
pub use lines::{Line, ADJACENT, LINES};
