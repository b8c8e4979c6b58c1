//! Terminal results reported by the orchestrator.

use super::Side;
use serde::{Deserialize, Serialize};

/// Outcome of a concluded game.
///
/// [`Game::advance`](crate::Game::advance) returns `Some(outcome)` once and
/// `None` while the game is still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The X side completed a triple.
    XWin,
    /// The O side completed a triple.
    OWin,
    /// The board filled up with no triple completed.
    Draw,
}

impl Outcome {
    /// The win outcome for `side`.
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::X => Outcome::XWin,
            Side::O => Outcome::OWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::XWin => Some(Side::X),
            Outcome::OWin => Some(Side::O),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{} wins", side),
            None => write!(f, "Draw"),
        }
    }
}
