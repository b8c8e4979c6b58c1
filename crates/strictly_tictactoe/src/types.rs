//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side in the game, either X or O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Side {
    /// The X side.
    #[display("X")]
    X,
    /// The O side.
    #[display("O")]
    O,
}

impl Side {
    /// Returns the opposite side.
    pub fn swap_side(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: handing a snapshot to the search engine or a test
/// never aliases the board owned by a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places `side` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: Position, side: Side) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(side);
        Ok(())
    }

    /// Places `side` at a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for indices past 8 and
    /// [`MoveError::Occupied`] for taken squares.
    pub fn set_index(&mut self, index: usize, side: Side) -> Result<(), MoveError> {
        self.set(Position::try_from(index)?, side)
    }

    /// Places a mark without checking occupancy. Search probes only.
    pub(crate) fn place_unchecked(&mut self, pos: Position, side: Side) {
        self.squares[pos.to_index()] = Square::Occupied(side);
    }

    /// Clears a square. Used by the search engine to undo probe moves.
    pub(crate) fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is empty.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        super::rules::is_full(self)
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a compact human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = self.squares[pos]
                    .side()
                    .map_or_else(|| (pos + 1).to_string(), |side| side.to_string());
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::ops::Index<Position> for Board {
    type Output = Square;

    fn index(&self, pos: Position) -> &Square {
        &self.squares[pos.to_index()]
    }
}

/// Read-only view of a board handed to players.
///
/// The view only borrows the board immutably and exposes no mutating
/// method, so a player cannot alter the game it is asked to move in.
/// [`BoardView::snapshot`] gives an owned copy for scratch work.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `board`.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.board.is_empty(pos)
    }

    /// Checks if any square equals `square`.
    pub fn contains(&self, square: Square) -> bool {
        self.board.squares().contains(&square)
    }

    /// Iterates over the squares in index order.
    pub fn iter(&self) -> std::slice::Iter<'a, Square> {
        self.board.squares().iter()
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + 'a {
        let board = self.board;
        Position::ALL.into_iter().filter(move |pos| board.is_empty(*pos))
    }

    /// Returns an owned copy of the viewed board.
    pub fn snapshot(&self) -> Board {
        *self.board
    }
}

impl std::ops::Index<Position> for BoardView<'_> {
    type Output = Square;

    fn index(&self, pos: Position) -> &Square {
        &self.board[pos]
    }
}

impl<'a> IntoIterator for BoardView<'a> {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
