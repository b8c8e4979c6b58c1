//! Tests for loading the TOML config file.

use std::io::Write;
use std::path::PathBuf;
use strictly_minimax::{Difficulty, GameConfig};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file(
        r#"
difficulty = "easy"
log_path = "games/moves.txt"
seed = 99
games = 3
"#,
    );

    let config = GameConfig::load(Some(file.path())).unwrap();

    assert_eq!(*config.difficulty(), Some(Difficulty::Easy));
    assert_eq!(config.log_path_or_default(), PathBuf::from("games/moves.txt"));
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(config.games_or_default(), 3);
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = config_file("");

    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(config, GameConfig::default());
    assert_eq!(
        config.log_path_or_default(),
        PathBuf::from(GameConfig::DEFAULT_LOG_PATH)
    );
    assert_eq!(config.games_or_default(), GameConfig::DEFAULT_GAMES);
}

#[test]
fn test_malformed_config_is_rejected() {
    let file = config_file("difficulty = ");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    let file = config_file(r#"difficulty = "nightmare""#);
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_unknown_field_is_rejected() {
    let file = config_file("think_chance = 0.5\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = GameConfig::load(Some(&missing)).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
