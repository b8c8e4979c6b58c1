//! Player trait and the built-in AI players.

mod minimax_ai;
mod random;

pub use minimax_ai::MinimaxAi;
pub use random::RandomAi;

use super::{BoardView, Position, Side};
use derive_more::{Display, Error};
use tracing::instrument;

/// Trait for anything that can choose a move.
///
/// A player receives a read-only view of the board as it stands before
/// the move, plus the side it plays this turn. It must answer with an
/// empty position; the orchestrator treats anything else as fatal.
pub trait Player {
    /// Decides the next move for `side`.
    fn decide_move(&mut self, view: BoardView<'_>, side: Side) -> Result<Position, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn decide_move(&mut self, view: BoardView<'_>, side: Side) -> Result<Position, PlayerError> {
        (**self).decide_move(view, side)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Failure of a player to produce any move at all (closed input, I/O).
#[derive(Debug, Clone, Display, Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for PlayerError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}
