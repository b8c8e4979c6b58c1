//! Tests for interactive and AI-only sessions.

use std::io::Cursor;
use strictly_minimax::{
    Difficulty, PlaySettings, SeriesSettings, Tally, play_interactive, result_message, run_series,
    start_side,
};
use strictly_tictactoe::{Outcome, Side};

/// Enough cycling square numbers for every human turn of one game.
fn move_script() -> String {
    "1\n2\n3\n4\n5\n6\n7\n8\n9\n".repeat(5)
}

fn assert_log_lines(text: &str, first: Side) {
    let lines: Vec<&str> = text.lines().collect();
    assert!((5..=9).contains(&lines.len()), "log: {text:?}");
    for (i, line) in lines.iter().enumerate() {
        let side = if i % 2 == 0 { first } else { first.swap_side() };
        let (prefix, number) = line.split_once(": ").expect("side prefix");
        assert_eq!(prefix, side.to_string());
        let number: usize = number.parse().expect("square number");
        assert!((1..=9).contains(&number));
    }
}

#[test]
fn test_start_side_mapping() {
    assert_eq!(start_side(Side::X, true), Side::X);
    assert_eq!(start_side(Side::X, false), Side::O);
    assert_eq!(start_side(Side::O, true), Side::O);
    assert_eq!(start_side(Side::O, false), Side::X);
}

#[test]
fn test_result_message_from_human_view() {
    assert_eq!(result_message(Outcome::XWin, Side::X), "You win!");
    assert_eq!(result_message(Outcome::OWin, Side::O), "You win!");
    assert_eq!(
        result_message(Outcome::XWin, Side::O),
        "You lose. Good luck next time!"
    );
    assert_eq!(result_message(Outcome::Draw, Side::X), "The game ends with a draw!");
}

#[test]
fn test_interactive_game_with_settings() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("moves.txt");
    let settings = PlaySettings::new(
        Some(Difficulty::Impossible),
        Some(Side::X),
        Some(true),
        log_path.clone(),
        Some(5),
    );
    let mut output = Vec::new();

    let outcome = play_interactive(&settings, Cursor::new(move_script()), &mut output).unwrap();

    // A full-strength AI never loses.
    assert_ne!(outcome, Outcome::XWin);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Choose your move (1-9): "));
    assert!(text.contains(result_message(outcome, Side::X)));
    assert!(text.ends_with("Thanks for playing our game!\n"));
    assert_log_lines(&std::fs::read_to_string(&log_path).unwrap(), Side::X);
}

#[test]
fn test_interactive_game_prompts_for_missing_settings() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("tictactoe.txt");
    let settings = PlaySettings::new(None, None, None, log_path.clone(), Some(8));
    // Impossible, play O, let the AI start.
    let input = format!("9\n5\no\nmaybe\nn\n{}", move_script());
    let mut output = Vec::new();

    let outcome = play_interactive(&settings, Cursor::new(input), &mut output).unwrap();

    assert_ne!(outcome, Outcome::OWin);
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("5. Impossible\nChoose your difficulty (1-5): "));
    assert!(text.contains("Invalid difficulty. Please choose again (1-5): "));
    assert!(text.contains("Choose your side (X/O): "));
    assert!(text.contains("Invalid Y/N input. Will you go first (Y/N)? "));
    // The AI plays X and moves first.
    assert_log_lines(&std::fs::read_to_string(&log_path).unwrap(), Side::X);
}

#[test]
fn test_interactive_game_fails_when_input_runs_out() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PlaySettings::new(
        Some(Difficulty::Easy),
        Some(Side::X),
        Some(true),
        dir.path().join("moves.txt"),
        Some(1),
    );
    let result = play_interactive(&settings, Cursor::new("1\n"), Vec::new());
    assert!(result.is_err());
}

#[test]
fn test_perfect_series_is_all_draws() {
    let settings = SeriesSettings::new(4, Difficulty::Impossible, Difficulty::Impossible, Some(3), None);
    let tally = run_series(&settings).unwrap();
    assert_eq!(
        tally,
        Tally {
            x_wins: 0,
            o_wins: 0,
            draws: 4
        }
    );
}

#[test]
fn test_braindead_never_beats_impossible() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("series.txt");
    let settings = SeriesSettings::new(
        6,
        Difficulty::Braindead,
        Difficulty::Impossible,
        Some(11),
        Some(log_path.clone()),
    );

    let tally = run_series(&settings).unwrap();

    assert_eq!(tally.total(), 6);
    assert_eq!(tally.x_wins, 0);
    let logged = std::fs::read_to_string(&log_path).unwrap();
    assert!(logged.lines().count() >= 6 * 5);
}

#[test]
fn test_same_seed_same_series() {
    let settings = SeriesSettings::new(5, Difficulty::Medium, Difficulty::Easy, Some(42), None);
    assert_eq!(run_series(&settings).unwrap(), run_series(&settings).unwrap());
}
