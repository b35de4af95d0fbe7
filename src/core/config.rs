//! Session configuration types.
//!
//! Sessions are configured at construction by providing:
//! - `GameMode`: who controls each side (PvP, or PvC with the human's side)
//! - `RulesConfig`: mark lifetime, draw cap, and match length
//! - `SessionConfig`: combines the above with the RNG seed
//!
//! Every config is validated before the first round begins.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::side::Side;

/// Turns a placed mark survives before it is cleared.
pub const DEFAULT_MARK_LIFETIME: u8 = 7;

/// Placements in one round after which the round is drawn.
pub const DEFAULT_DRAW_THRESHOLD: u32 = 30;

/// Round wins needed to take the match.
pub const DEFAULT_WINNING_SCORE: u8 = 3;

/// Who plays the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans alternate on the same board.
    PlayerVsPlayer,
    /// One human plays `human_side`; the computer plays the other.
    PlayerVsComputer { human_side: Side },
}

impl GameMode {
    /// The side played by the computer, if any.
    #[must_use]
    pub fn computer_side(&self) -> Option<Side> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer { human_side } => Some(human_side.other()),
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PlayerVsComputer {
            human_side: Side::First,
        }
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    /// Parses `pvp`, `pvc` (human plays X), `pvc-first` or `pvc-second`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PlayerVsPlayer),
            "pvc" | "pvc-first" | "pvc-x" => Ok(GameMode::PlayerVsComputer {
                human_side: Side::First,
            }),
            "pvc-second" | "pvc-o" => Ok(GameMode::PlayerVsComputer {
                human_side: Side::Second,
            }),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::PlayerVsPlayer => write!(f, "pvp"),
            GameMode::PlayerVsComputer { human_side: Side::First } => write!(f, "pvc-first"),
            GameMode::PlayerVsComputer { human_side: Side::Second } => write!(f, "pvc-second"),
        }
    }
}

/// Rule constants for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Lifetime given to a freshly placed mark.
    pub mark_lifetime: u8,

    /// A round with no winner is drawn once this many placements are made.
    pub draw_threshold: u32,

    /// Round wins that end the match.
    pub winning_score: u8,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            mark_lifetime: DEFAULT_MARK_LIFETIME,
            draw_threshold: DEFAULT_DRAW_THRESHOLD,
            winning_score: DEFAULT_WINNING_SCORE,
        }
    }
}

impl RulesConfig {
    /// Set the mark lifetime.
    #[must_use]
    pub fn with_mark_lifetime(mut self, lifetime: u8) -> Self {
        self.mark_lifetime = lifetime;
        self
    }

    /// Set the draw threshold.
    #[must_use]
    pub fn with_draw_threshold(mut self, threshold: u32) -> Self {
        self.draw_threshold = threshold;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u8) -> Self {
        self.winning_score = score;
        self
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mark_lifetime == 0 {
            return Err(ConfigError::InvalidLifetime(self.mark_lifetime));
        }
        if self.draw_threshold == 0 {
            return Err(ConfigError::InvalidDrawThreshold(self.draw_threshold));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::InvalidWinningScore(self.winning_score));
        }
        Ok(())
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Who controls each side.
    pub mode: GameMode,

    /// Rule constants.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Seed for the computer's random fallback.
    /// Same seed and same requests produce the same game.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// When true the computer answers inside the same call that handed it
    /// the turn. When false the caller drives it via `place_computer_move`.
    #[serde(default = "default_true")]
    pub computer_replies_immediately: bool,
}

fn default_seed() -> u64 {
    42
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            rules: RulesConfig::default(),
            seed: default_seed(),
            computer_replies_immediately: true,
        }
    }
}

impl SessionConfig {
    /// Player-vs-player configuration with default rules.
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            ..Self::default()
        }
    }

    /// Player-vs-computer configuration with the human on `human_side`.
    pub fn pvc(human_side: Side) -> Self {
        Self {
            mode: GameMode::PlayerVsComputer { human_side },
            ..Self::default()
        }
    }

    /// Set custom rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Set custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Leave the computer's moves to explicit `place_computer_move` calls.
    #[must_use]
    pub fn with_deferred_computer(mut self) -> Self {
        self.computer_replies_immediately = false;
        self
    }

    /// Check the configuration before any round begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()
    }
}
