//! Error types for the rules engine.

use super::side::Side;

/// A rejected placement request.
///
/// Every variant is recoverable: the request had no effect on the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The cell index is not in 0..=8.
    #[error("cell {0} is off the board")]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[error("cell {0} is occupied")]
    Occupied(usize),

    /// The requesting side may not move now (wrong side, or the side is
    /// played by the computer).
    #[error("it is not {0}'s turn")]
    NotYourTurn(Side),

    /// The round has ended; only a reset is accepted.
    #[error("the round is over")]
    RoundOver,
}

/// Configuration rejected at session construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The mode string is not one of the recognized modes.
    #[error("unknown game mode {0:?}")]
    UnknownMode(String),

    /// Marks must live at least one turn.
    #[error("mark lifetime must be at least 1, got {0}")]
    InvalidLifetime(u8),

    /// The draw cap must allow at least one placement.
    #[error("draw threshold must be at least 1, got {0}")]
    InvalidDrawThreshold(u32),

    /// A match needs at least one round to win.
    #[error("winning score must be at least 1, got {0}")]
    InvalidWinningScore(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::OutOfRange(9).to_string(), "cell 9 is off the board");
        assert_eq!(MoveError::Occupied(4).to_string(), "cell 4 is occupied");
        assert_eq!(
            MoveError::NotYourTurn(Side::Second).to_string(),
            "it is not O's turn"
        );
        assert_eq!(MoveError::RoundOver.to_string(), "the round is over");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::UnknownMode("chess".into()).to_string(),
            "unknown game mode \"chess\""
        );
        assert_eq!(
            ConfigError::InvalidLifetime(0).to_string(),
            "mark lifetime must be at least 1, got 0"
        );
    }
}
