//! Strictly Minimax library - console front end for tic-tac-toe
//!
//! The rules, players and search engine live in [`strictly_tictactoe`].
//! This crate supplies the collaborators around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings and difficulty levels
//! - **Console**: board rendering, validated prompts, the human player
//! - **Session**: a human against the AI, or an AI-only series
//! - **CLI**: clap argument definitions for the binary
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Difficulty, SeriesSettings, run_series};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = SeriesSettings::new(2, Difficulty::Impossible, Difficulty::Impossible, Some(1), None);
//! let tally = run_series(&settings)?;
//! assert_eq!(tally.draws, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command, go_first_flag};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Difficulty, GameConfig};

// Crate-level exports - Console collaborator
pub use console::{
    HumanPlayer, parse_difficulty, parse_move, parse_side, parse_yes_no, prompt_difficulty,
    prompt_go_first, prompt_side, prompt_until_valid, render_board,
};

// Crate-level exports - Sessions
pub use session::{
    PlaySettings, SeriesSettings, Tally, make_ai, play_interactive, result_message, run_series,
    start_side,
};
