//! Seeded randomness for the computer's random-fallback move.
//!
//! The session owns one `GameRng`, seeded from `SessionConfig::seed`. Its
//! position can be saved as a `GameRngState` and handed back to
//! `Session::restore_rng` to resume the same sequence of random picks.
//!
//! ```
//! use decay_tac_toe::core::GameRng;
//!
//! let empty = [2, 5, 7];
//! let mut rng = GameRng::new(42);
//! let saved = rng.state();
//! let first = rng.choose(&empty).copied();
//!
//! let mut resumed = GameRng::resume(&saved);
//! assert_eq!(resumed.choose(&empty).copied(), first);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Reproducible cell picker backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Continue a saved stream from exactly where it stopped.
    #[must_use]
    pub fn resume(state: &GameRngState) -> Self {
        let mut rng = Self::new(state.seed);
        rng.stream.set_word_pos(state.word_pos);
        rng
    }

    /// Pick one of `cells` uniformly, or `None` if there are none.
    #[must_use]
    pub fn choose<'a, T>(&mut self, cells: &'a [T]) -> Option<&'a T> {
        cells.choose(&mut self.stream)
    }

    /// Position in the stream, for checkpointing a game.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }
}

/// Saved `GameRng` position: the seed plus how far the stream has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}
