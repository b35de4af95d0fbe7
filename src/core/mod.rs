//! Core engine types: sides, RNG, configuration, errors.
//!
//! Everything here is a leaf: the board, rules, opponent and session
//! modules build on these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{GameMode, RulesConfig, SessionConfig};
pub use error::{ConfigError, MoveError};
pub use rng::{GameRng, GameRngState};
pub use side::{MarkColour, Side, SideMap};
