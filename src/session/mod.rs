//! Match sessions.
//!
//! A `Session` is the only stateful part of the engine. Presentation code
//! sends it intents and renders what it returns:
//!
//! - `request_placement(index, side)` → `TurnOutcome`
//! - `place_computer_move()` → `TurnOutcome` (deferred computer replies)
//! - `request_reset()` → `Snapshot`
//! - `query_state()` → `Snapshot`
//!
//! PvP and PvC share one session type; a `TurnPolicy` decides which sides
//! the computer plays.

pub mod game;
pub mod policy;
pub mod record;
pub mod snapshot;

pub use game::Session;
pub use policy::{policy_for, Controller, PlayerVsComputer, PlayerVsPlayer, TurnPolicy};
pub use record::{CellChange, MoveRecord, MoveSource, TurnOutcome};
pub use snapshot::{RoundState, Snapshot};
