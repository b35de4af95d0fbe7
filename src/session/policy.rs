//! Turn ownership: who controls each side.
//!
//! The session is the same for both modes; only the `TurnPolicy` differs.
//! - `PlayerVsPlayer`: both sides are human
//! - `PlayerVsComputer`: one human side, the other played by the computer

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, Side};

/// Who supplies a side's moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves arrive through `Session::request_placement`.
    Human,
    /// Moves come from the session's opponent policy.
    Computer,
}

/// Policy answering "who controls the next move".
pub trait TurnPolicy: Send + Sync {
    /// The controller of `side`.
    fn controller(&self, side: Side) -> Controller;

    /// The mode this policy implements.
    fn mode(&self) -> GameMode;
}

/// Two humans share the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerVsPlayer;

impl TurnPolicy for PlayerVsPlayer {
    fn controller(&self, _side: Side) -> Controller {
        Controller::Human
    }

    fn mode(&self) -> GameMode {
        GameMode::PlayerVsPlayer
    }
}

/// A human on `human`, the computer on the other side.
#[derive(Clone, Copy, Debug)]
pub struct PlayerVsComputer {
    pub human: Side,
}

impl TurnPolicy for PlayerVsComputer {
    fn controller(&self, side: Side) -> Controller {
        if side == self.human {
            Controller::Human
        } else {
            Controller::Computer
        }
    }

    fn mode(&self) -> GameMode {
        GameMode::PlayerVsComputer { human_side: self.human }
    }
}

/// Build the policy for a configured mode.
#[must_use]
pub fn policy_for(mode: GameMode) -> Box<dyn TurnPolicy> {
    match mode {
        GameMode::PlayerVsPlayer => Box::new(PlayerVsPlayer),
        GameMode::PlayerVsComputer { human_side } => Box::new(PlayerVsComputer { human: human_side }),
    }
}
