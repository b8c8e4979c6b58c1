//! Game sessions: a human against the minimax AI, or an AI-only series.

use crate::config::Difficulty;
use crate::console::{HumanPlayer, prompt_difficulty, prompt_go_first, prompt_side, render_board};
use anyhow::{Context, Result};
use derive_getters::Getters;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use strictly_tictactoe::{BoardView, Game, MinimaxAi, Outcome, Player, Side, WriterLog};
use tracing::{info, instrument};

/// Options for an interactive game. Anything left `None` is prompted for.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct PlaySettings {
    difficulty: Option<Difficulty>,
    human_side: Option<Side>,
    human_first: Option<bool>,
    log_path: PathBuf,
    seed: Option<u64>,
}

impl PlaySettings {
    /// Creates play settings.
    pub fn new(
        difficulty: Option<Difficulty>,
        human_side: Option<Side>,
        human_first: Option<bool>,
        log_path: PathBuf,
        seed: Option<u64>,
    ) -> Self {
        Self {
            difficulty,
            human_side,
            human_first,
            log_path,
            seed,
        }
    }
}

/// Options for an AI-only series.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SeriesSettings {
    games: u32,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    seed: Option<u64>,
    log_path: Option<PathBuf>,
}

impl SeriesSettings {
    /// Creates series settings.
    pub fn new(
        games: u32,
        x_difficulty: Difficulty,
        o_difficulty: Difficulty,
        seed: Option<u64>,
        log_path: Option<PathBuf>,
    ) -> Self {
        Self {
            games,
            x_difficulty,
            o_difficulty,
            seed,
            log_path,
        }
    }
}

/// Win/draw counts over a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::XWin => self.x_wins += 1,
            Outcome::OWin => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Number of games counted.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Side that moves first given the human's side and whether they start.
pub fn start_side(human_side: Side, human_first: bool) -> Side {
    if human_first {
        human_side
    } else {
        human_side.swap_side()
    }
}

/// Closing line shown to the human.
pub fn result_message(outcome: Outcome, human_side: Side) -> &'static str {
    match outcome.winner() {
        None => "The game ends with a draw!",
        Some(side) if side == human_side => "You win!",
        Some(_) => "You lose. Good luck next time!",
    }
}

/// Builds the AI opponent for `difficulty`.
pub fn make_ai(name: &str, difficulty: Difficulty, seed: Option<u64>) -> MinimaxAi {
    match seed {
        Some(seed) => MinimaxAi::seeded(name, difficulty.think_chance(), seed),
        None => MinimaxAi::new(name, difficulty.think_chance()),
    }
}

/// Plays one game between a console human and the minimax AI.
///
/// The move log at `settings.log_path` is truncated first and receives
/// every move of the game.
#[instrument(skip(input, output))]
pub fn play_interactive<R: BufRead, W: Write>(
    settings: &PlaySettings,
    mut input: R,
    mut output: W,
) -> Result<Outcome> {
    let log_file = File::create(&settings.log_path).with_context(|| {
        format!(
            "Failed to create move log {}",
            settings.log_path.display()
        )
    })?;

    let difficulty = match settings.difficulty {
        Some(difficulty) => difficulty,
        None => {
            let difficulty = prompt_difficulty(&mut input, &mut output)?;
            writeln!(output)?;
            difficulty
        }
    };
    let human_side = match settings.human_side {
        Some(side) => side,
        None => {
            let side = prompt_side(&mut input, &mut output)?;
            writeln!(output)?;
            side
        }
    };
    let human_first = match settings.human_first {
        Some(first) => first,
        None => prompt_go_first(&mut input, &mut output)?,
    };

    let start = start_side(human_side, human_first);
    info!(%difficulty, %human_side, %start, "Starting interactive game");

    let ai = make_ai("Computer", difficulty, settings.seed);
    let (outcome, final_board) = {
        let human = HumanPlayer::new("You", &mut input, &mut output);
        let (player_x, player_o): (Box<dyn Player + '_>, Box<dyn Player + '_>) = match human_side {
            Side::X => (Box::new(human), Box::new(ai)),
            Side::O => (Box::new(ai), Box::new(human)),
        };
        let mut game = Game::new(player_x, player_o, start).with_log(WriterLog::new(log_file));
        let outcome = game.play_out()?;
        (outcome, game.board().snapshot())
    };

    writeln!(output)?;
    write!(output, "{}", render_board(BoardView::new(&final_board)))?;
    writeln!(output)?;
    writeln!(output, "{}", result_message(outcome, human_side))?;
    writeln!(output, "Thanks for playing our game!")?;
    Ok(outcome)
}

/// Plays a series of AI-only games, alternating which side starts.
///
/// With a seed, game `i` seeds X with `seed + 2i` and O with `seed + 2i + 1`.
#[instrument]
pub fn run_series(settings: &SeriesSettings) -> Result<Tally> {
    let log_file = settings
        .log_path
        .as_ref()
        .map(|path| {
            File::create(path)
                .with_context(|| format!("Failed to create move log {}", path.display()))
        })
        .transpose()?;

    let mut tally = Tally::default();
    for game_index in 0..settings.games {
        let offset = u64::from(game_index) * 2;
        let x = make_ai(
            "X",
            settings.x_difficulty,
            settings.seed.map(|s| s.wrapping_add(offset)),
        );
        let o = make_ai(
            "O",
            settings.o_difficulty,
            settings.seed.map(|s| s.wrapping_add(offset + 1)),
        );
        let start = if game_index % 2 == 0 { Side::X } else { Side::O };

        let game = Game::new(Box::new(x), Box::new(o), start);
        let mut game = match &log_file {
            Some(file) => game.with_log(WriterLog::new(file)),
            None => game,
        };
        let outcome = game.play_out()?;
        info!(game = game_index + 1, %start, %outcome, "Series game finished");
        tally.record(outcome);
    }

    Ok(tally)
}
