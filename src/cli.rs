//! Command-line interface for strictly_minimax.

use crate::config::Difficulty;
use crate::console::parse_side;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Side;

/// Strictly Minimax - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a configurable minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play against the AI in the terminal
    Play {
        /// Opponent difficulty (prompted for if omitted)
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Side you play, X or O (prompted for if omitted)
        #[arg(long, value_parser = parse_side)]
        side: Option<Side>,

        /// Move first
        #[arg(long, conflicts_with = "second")]
        first: bool,

        /// Let the AI move first
        #[arg(long)]
        second: bool,

        /// File the moves are written to
        #[arg(long)]
        log: Option<PathBuf>,

        /// Seed for reproducible AI play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Watch the AI play itself over a series of games
    Watch {
        /// Number of games
        #[arg(short, long)]
        games: Option<u32>,

        /// Difficulty of the X player
        #[arg(long, value_enum, default_value_t = Difficulty::Impossible)]
        x_difficulty: Difficulty,

        /// Difficulty of the O player
        #[arg(long, value_enum, default_value_t = Difficulty::Impossible)]
        o_difficulty: Difficulty,

        /// Seed for reproducible AI play
        #[arg(long)]
        seed: Option<u64>,

        /// File the moves of every game are written to
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

impl Command {
    /// `play` with every option left to prompts and config.
    pub fn default_play() -> Self {
        Command::Play {
            difficulty: None,
            side: None,
            first: false,
            second: false,
            log: None,
            seed: None,
        }
    }
}

impl Cli {
    /// The subcommand, defaulting to `play`.
    pub fn resolved_command(&self) -> Command {
        self.command.clone().unwrap_or_else(Command::default_play)
    }
}

/// Maps the `--first`/`--second` flags to an optional choice.
pub fn go_first_flag(first: bool, second: bool) -> Option<bool> {
    match (first, second) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
