//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::MinimaxAi;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_minimax.toml";

/// How hard the minimax opponent plays.
///
/// Each level maps to the probability that the AI runs its full search on
/// a turn. It always takes a winning move and blocks a losing one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Never searches.
    Braindead,
    /// Searches one turn in five.
    Easy,
    /// Searches two turns in five.
    Medium,
    /// Searches three turns in five.
    Hard,
    /// Always searches and never loses.
    #[default]
    Impossible,
}

impl Difficulty {
    /// Probability of running the full search on a turn.
    pub fn think_chance(self) -> f64 {
        match self {
            Difficulty::Braindead => 0.0,
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.4,
            Difficulty::Hard => 0.6,
            Difficulty::Impossible => MinimaxAi::FULL_STRENGTH,
        }
    }

    /// Menu number (1-5).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Parses a menu number (1-5) or a level name, ignoring case.
    pub fn from_menu(input: &str) -> Option<Self> {
        let input = input.trim();
        <Self as strum::IntoEnumIterator>::iter().find(|level| {
            input == level.number().to_string() || input.eq_ignore_ascii_case(&level.to_string())
        })
    }
}

/// Settings read from the config file. Command-line flags override them.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Opponent strength; prompted for when absent.
    #[serde(default)]
    difficulty: Option<Difficulty>,

    /// Where the move log is written.
    #[serde(default)]
    log_path: Option<PathBuf>,

    /// Seed for reproducible AI play.
    #[serde(default)]
    seed: Option<u64>,

    /// Number of games in an AI series.
    #[serde(default)]
    games: Option<u32>,
}

impl GameConfig {
    /// Move log written when nothing else is configured.
    pub const DEFAULT_LOG_PATH: &'static str = "tictactoe.txt";

    /// Games in an AI series when nothing else is configured.
    pub const DEFAULT_GAMES: u32 = 10;

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_FILE`] if it exists,
    /// otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Move log path, falling back to [`Self::DEFAULT_LOG_PATH`].
    pub fn log_path_or_default(&self) -> PathBuf {
        self.log_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_LOG_PATH))
    }

    /// Series length, falling back to [`Self::DEFAULT_GAMES`].
    pub fn games_or_default(&self) -> u32 {
        self.games.unwrap_or(Self::DEFAULT_GAMES)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
