//! Exhaustive minimax search with a tunable "think chance".
//!
//! The engine works on an owned [`Board`] snapshot. Probe moves are placed
//! and undone in place, so the caller's board is never touched.
//!
//! Scores are always from the point of view of the side the search runs
//! for: `+1` win, `-1` loss, `0` draw. A win is only scored once control
//! has passed to the next ply, which keeps each terminal counted once.

use super::rules::{find_winning_move, has_won, is_full};
use super::{Board, Position, Side};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, trace};

/// Score of a won position.
pub const WIN: i8 = 1;
/// Score of a lost position.
pub const LOSS: i8 = -1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;

/// Picks a move for `side` the way [`MinimaxAi`](crate::MinimaxAi) does.
///
/// 1. On an empty board any square is as good as any other, so one is drawn
///    uniformly without searching.
/// 2. An immediate win is always taken.
/// 3. With probability `1 - think_chance` the engine skips the search: it
///    blocks an immediate opponent win if there is one, otherwise it plays a
///    uniformly random empty square.
/// 4. Otherwise it runs the full search and draws uniformly among the moves
///    tied for the best score.
///
/// Returns `None` only when the board has no empty square. The board must
/// not already hold a completed triple.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    side: Side,
    think_chance: f64,
    rng: &mut R,
) -> Option<Position> {
    debug_assert!(
        !has_won(board, Side::X) && !has_won(board, Side::O),
        "search started on a finished board"
    );

    if board.is_blank() {
        let pos = Position::from_index(rng.random_range(0..9));
        debug!(?pos, "Empty board, opening at random");
        return pos;
    }

    if let Some(pos) = find_winning_move(board, side) {
        debug!(?pos, "Taking immediate win");
        return Some(pos);
    }

    if rng.random::<f64>() >= think_chance {
        if let Some(pos) = find_winning_move(board, side.swap_side()) {
            debug!(?pos, "Skipped search, blocking opponent");
            return Some(pos);
        }
        let empty: Vec<Position> = board.empty_positions().collect();
        let pos = empty.choose(rng).copied();
        debug!(?pos, "Skipped search, playing at random");
        return pos;
    }

    let (score, best) = best_moves(board, side);
    let pos = best.choose(rng).copied();
    debug!(?pos, score, tied = best.len(), "Search finished");
    pos
}

/// Runs the full search for `side` and returns the best score together
/// with every move that reaches it, in index order.
///
/// The move list is empty only for a full board.
pub fn best_moves(board: &Board, side: Side) -> (i8, Vec<Position>) {
    let mut work = *board;
    let mut max_score = LOSS;
    let mut best = Vec::new();

    for (pos, score) in move_scores(&mut work, side, true) {
        trace!(?pos, score, "Scored top-level move");
        if best.is_empty() || score > max_score {
            max_score = score;
            best.clear();
            best.push(pos);
        } else if score == max_score {
            best.push(pos);
        }
    }

    (max_score, best)
}

/// Evaluates `board` for `side`.
///
/// `maximizing` says whose ply it is: `side` when true, the opponent
/// otherwise. The board is restored before returning.
pub fn minimax(board: &mut Board, side: Side, maximizing: bool) -> i8 {
    if !maximizing && has_won(board, side) {
        return WIN;
    }
    if maximizing && has_won(board, side.swap_side()) {
        return LOSS;
    }
    if is_full(board) {
        return DRAW;
    }

    let scores = move_scores(board, side, maximizing)
        .into_iter()
        .map(|(_, score)| score);
    if maximizing {
        scores.max().unwrap_or(DRAW)
    } else {
        scores.min().unwrap_or(DRAW)
    }
}

/// Scores every empty square of `board` for the ply described by
/// `maximizing`.
///
/// Each square gets the mark of whoever moves on this ply, is scored by
/// recursing into the other ply, and is cleared again.
pub fn move_scores(board: &mut Board, side: Side, maximizing: bool) -> Vec<(Position, i8)> {
    let mark = if maximizing { side } else { side.swap_side() };
    let moves: Vec<Position> = board.empty_positions().collect();

    moves
        .into_iter()
        .map(|pos| {
            board.place_unchecked(pos, mark);
            let score = minimax(board, side, !maximizing);
            board.clear(pos);
            (pos, score)
        })
        .collect()
}
