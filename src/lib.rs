//! # decay-tac-toe
//!
//! Rules engine for tic-tac-toe with decaying marks.
//!
//! Every mark vanishes seven turns after it is placed, so the board never
//! fills up. A round ends when a side holds a full line or after thirty
//! placements; a match goes to the first side to win three rounds.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine never renders, animates or waits.
//!    Callers send intents and draw the snapshots they get back.
//!
//! 2. **One Session, Two Modes**: Player-vs-player and player-vs-computer
//!    share the same pipeline; a `TurnPolicy` decides who controls a side.
//!
//! 3. **Deterministic**: The computer's randomness comes from a seeded
//!    `GameRng`, so a config plus a request sequence replays exactly.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `board`: Cells, placement, the decay step
//! - `rules`: Winning lines, draw cap, round results
//! - `opponent`: Computer move policies
//! - `session`: Turn order, scoring, the end-of-turn pipeline
//!
//! ## Example
//!
//! ```
//! use decay_tac_toe::{Session, SessionConfig, Side};
//!
//! let mut session = Session::new(SessionConfig::pvc(Side::First)).unwrap();
//! let outcome = session.request_placement(0, Side::First).unwrap();
//!
//! // The computer answered inside the same call.
//! assert_eq!(outcome.move_count, 2);
//! assert!(outcome.computer_move().is_some());
//! ```

pub mod board;
pub mod core;
pub mod opponent;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameMode, GameRng, GameRngState, MarkColour, MoveError, RulesConfig,
    SessionConfig, Side, SideMap,
};

pub use crate::board::{Board, Cell, CELL_COUNT};

pub use crate::rules::{winning_line, RoundResult, Rules, LINES};

pub use crate::opponent::{
    Decision, HeuristicConfig, HeuristicOpponent, OpponentPolicy, Rule, UniformOpponent,
};

pub use crate::session::{
    CellChange, Controller, MoveRecord, MoveSource, RoundState, Session, Snapshot,
    TurnOutcome, TurnPolicy,
};
