//! Console collaborator: board rendering, validated prompts and the human player.
//!
//! Everything here is generic over `BufRead`/`Write` so the same code runs
//! against the terminal and against in-memory buffers in tests.

use crate::config::Difficulty;
use std::fmt::Display;
use std::io::{BufRead, Write};
use strictly_tictactoe::{BoardView, Player, PlayerError, Position, Side};
use tracing::{debug, instrument};

const RULE: &str = "-------------";

/// Renders the board as a framed grid, numbering empty squares 1-9.
pub fn render_board(view: BoardView<'_>) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for (index, square) in view.iter().enumerate() {
        let symbol = square
            .side()
            .map_or_else(|| (index + 1).to_string(), |side| side.to_string());
        out.push_str(&format!("| {} ", symbol));
        if index % 3 == 2 {
            out.push_str("|\n");
            out.push_str(RULE);
            out.push('\n');
        }
    }
    out
}

/// Prompts until `parse` accepts a line.
///
/// `prompt` is printed first. After each rejected line the parse error and
/// `repeat_prompt` are printed as `"<error>. <repeat_prompt>"`.
///
/// # Errors
///
/// Fails when input ends or reading/writing fails.
pub fn prompt_until_valid<R, W, T, E>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    repeat_prompt: &str,
    mut parse: impl FnMut(&str) -> Result<T, E>,
) -> Result<T, PlayerError>
where
    R: BufRead,
    W: Write,
    E: Display,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PlayerError::new("Input closed"));
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!(input = line.trim(), error = %e, "Rejected input");
                write!(output, "{}. {}", e, repeat_prompt)?;
                output.flush()?;
            }
        }
    }
}

/// Parses `X` or `O`, either case.
pub fn parse_side(input: &str) -> Result<Side, String> {
    match input.trim() {
        "X" | "x" => Ok(Side::X),
        "O" | "o" => Ok(Side::O),
        _ => Err("Invalid side".to_string()),
    }
}

/// Parses `Y` or `N`, either case.
pub fn parse_yes_no(input: &str) -> Result<bool, String> {
    match input.trim() {
        "Y" | "y" => Ok(true),
        "N" | "n" => Ok(false),
        _ => Err("Invalid Y/N input".to_string()),
    }
}

/// Parses a difficulty menu entry.
pub fn parse_difficulty(input: &str) -> Result<Difficulty, String> {
    Difficulty::from_menu(input).ok_or_else(|| "Invalid difficulty".to_string())
}

/// Parses a 1-based square number into an empty position on `view`.
pub fn parse_move(input: &str, view: BoardView<'_>) -> Result<Position, String> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| "Invalid number".to_string())?;
    let position = number
        .checked_sub(1)
        .and_then(Position::from_index)
        .ok_or_else(|| "The square must be between 1 and 9".to_string())?;
    if !view.is_empty(position) {
        return Err(format!("Square {} is already taken", number));
    }
    Ok(position)
}

/// Asks which side the human plays.
pub fn prompt_side<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Side, PlayerError> {
    prompt_until_valid(
        input,
        output,
        "Choose your side (X/O): ",
        "Please enter the valid side (X/O): ",
        parse_side,
    )
}

/// Asks whether the human moves first.
pub fn prompt_go_first<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<bool, PlayerError> {
    prompt_until_valid(
        input,
        output,
        "Will you go first (Y/N)? ",
        "Will you go first (Y/N)? ",
        parse_yes_no,
    )
}

/// Shows the difficulty menu and reads a choice.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty, PlayerError> {
    let mut menu = String::new();
    for level in <Difficulty as strum::IntoEnumIterator>::iter() {
        menu.push_str(&format!("{}. {}\n", level.number(), level));
    }
    menu.push_str("Choose your difficulty (1-5): ");

    prompt_until_valid(input, output, &menu, "Please choose again (1-5): ", parse_difficulty)
}

/// Human player reading moves from a console.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a human player on the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, view), fields(player = %self.name))]
    fn decide_move(&mut self, view: BoardView<'_>, side: Side) -> Result<Position, PlayerError> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(view))?;
        writeln!(self.output, "You are playing {}.", side)?;

        let position = prompt_until_valid(
            &mut self.input,
            &mut self.output,
            "Choose your move (1-9): ",
            "Please choose an empty square (1-9): ",
            |line| parse_move(line, view),
        )?;
        debug!(?position, "Human chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
