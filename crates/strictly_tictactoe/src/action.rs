//! First-class move types for tic-tac-toe.
//!
//! A [`Move`] is the domain event produced each time the orchestrator
//! commits a player's decision. The move log consumes them in turn order.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a side placing its mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

/// Renders the move log line, positions numbered 1-9.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.side, self.position.to_index() + 1)
    }
}

/// Error raised when a move cannot be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index does not name one of the nine squares.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}
