//! Computer opponent.
//!
//! ## Overview
//!
//! The computer plays through an `OpponentPolicy`. The default is
//! `HeuristicOpponent`, a strictly ordered rule list that takes the decay
//! mechanic into account: it will not rely on a mark that expires before
//! the move could pay off.
//!
//! ## Usage
//!
//! ```rust
//! use decay_tac_toe::board::Board;
//! use decay_tac_toe::core::{GameRng, Side};
//! use decay_tac_toe::opponent::{HeuristicOpponent, OpponentPolicy, Rule};
//!
//! let mut board = Board::new();
//! board.place(0, Side::Second, 5).unwrap();
//! board.place(1, Side::Second, 5).unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let decision = HeuristicOpponent::default()
//!     .choose_move(&board, Side::Second, &mut rng)
//!     .unwrap();
//!
//! assert_eq!(decision.index, 2);
//! assert_eq!(decision.rule, Rule::WinNow);
//! ```

pub mod config;
pub mod heuristic;
pub mod policy;

pub use config::HeuristicConfig;
pub use heuristic::HeuristicOpponent;
pub use policy::{Decision, OpponentPolicy, Rule, UniformOpponent};
