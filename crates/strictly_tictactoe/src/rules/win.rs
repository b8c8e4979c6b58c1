//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Side, Square};

/// The eight winning triples: rows, then columns, then diagonals.
///
/// Scans for immediate wins and blocks walk this list in order, so the
/// first matching triple decides which square is returned.
pub const TRIPLES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `side` owns every square of some triple.
pub fn has_won(board: &Board, side: Side) -> bool {
    let mark = Square::Occupied(side);
    TRIPLES
        .iter()
        .any(|triple| triple.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the side owning a complete triple, if any.
pub fn winner(board: &Board) -> Option<Side> {
    [Side::X, Side::O]
        .into_iter()
        .find(|side| has_won(board, *side))
}

/// Finds a square that completes a triple for `side`.
///
/// A triple qualifies when two of its squares belong to `side` and the
/// third is empty. Triples are scanned in [`TRIPLES`] order.
pub fn find_winning_move(board: &Board, side: Side) -> Option<Position> {
    TRIPLES.iter().find_map(|triple| {
        let mut owned = 0;
        let mut empty = None;
        for pos in triple {
            match board.get(*pos) {
                Square::Empty => empty = Some(*pos),
                Square::Occupied(s) if s == side => owned += 1,
                Square::Occupied(_) => {}
            }
        }
        if owned == 2 { empty } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Side)]) -> Board {
        let mut board = Board::new();
        for (pos, side) in marks {
            board.set(*pos, *side).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Side::X));
        assert!(!has_won(&board, Side::O));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Side::X),
            (Position::TopCenter, Side::X),
            (Position::TopRight, Side::X),
        ]);
        assert!(has_won(&board, Side::X));
        assert!(!has_won(&board, Side::O));
        assert_eq!(winner(&board), Some(Side::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Side::O),
            (Position::Center, Side::O),
            (Position::BottomLeft, Side::O),
        ]);
        assert_eq!(winner(&board), Some(Side::O));
    }

    #[test]
    fn test_every_triple_wins() {
        for triple in TRIPLES {
            let board = board_with(&triple.map(|pos| (pos, Side::O)));
            assert!(has_won(&board, Side::O), "triple {triple:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Side::X),
            (Position::TopCenter, Side::X),
            (Position::TopRight, Side::O),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_find_winning_move_completes_column() {
        let board = board_with(&[
            (Position::MiddleLeft, Side::X),
            (Position::BottomLeft, Side::X),
            (Position::Center, Side::O),
        ]);
        assert_eq!(find_winning_move(&board, Side::X), Some(Position::TopLeft));
        assert_eq!(find_winning_move(&board, Side::O), None);
    }

    #[test]
    fn test_find_winning_move_ignores_blocked_triple() {
        let board = board_with(&[
            (Position::TopLeft, Side::X),
            (Position::TopCenter, Side::X),
            (Position::TopRight, Side::O),
        ]);
        assert_eq!(find_winning_move(&board, Side::X), None);
    }

    #[test]
    fn test_find_winning_move_prefers_first_triple() {
        // X threatens both the top row (at 2) and the left column (at 6).
        let board = board_with(&[
            (Position::TopLeft, Side::X),
            (Position::TopCenter, Side::X),
            (Position::MiddleLeft, Side::X),
        ]);
        assert_eq!(find_winning_move(&board, Side::X), Some(Position::TopRight));
    }
}
