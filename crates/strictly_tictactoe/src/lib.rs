//! Pure tic-tac-toe game logic.
//!
//! This crate holds everything with real rules in it:
//!
//! - **Board**: [`Board`], [`Square`], [`Position`] and the read-only [`BoardView`]
//! - **Rules**: pure win/draw evaluation in [`rules`]
//! - **Players**: the [`Player`] trait plus [`RandomAi`] and [`MinimaxAi`]
//! - **Search**: exhaustive minimax with a tunable think chance in [`minimax`]
//! - **Orchestration**: [`Game`], which drives one move per [`Game::advance`]
//!
//! Terminal I/O lives elsewhere; a console player only has to implement
//! [`Player`].
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, MinimaxAi, Outcome, Side};
//!
//! let x = MinimaxAi::seeded("X", 1.0, 1);
//! let o = MinimaxAi::seeded("O", 1.0, 2);
//! let mut game = Game::new(Box::new(x), Box::new(o), Side::X);
//! // Two perfect players always draw.
//! assert_eq!(game.play_out().unwrap(), Outcome::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod log;
mod outcome;
mod position;
mod types;

pub mod minimax;
pub mod players;
pub mod rules;

pub use action::{Move, MoveError};
pub use game::{Game, GameError};
pub use log::{MoveLog, NullLog, WriterLog};
pub use outcome::Outcome;
pub use players::{MinimaxAi, Player, PlayerError, RandomAi};
pub use position::Position;
pub use rules::{has_won, is_full};
pub use types::{Board, BoardView, Side, Square};
