//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from board storage so the search engine can call
//! them on probe positions that never belong to a game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{TRIPLES, find_winning_move, has_won, winner};
