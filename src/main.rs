//! Strictly Minimax - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax::{
    Cli, Command, GameConfig, PlaySettings, SeriesSettings, go_first_flag, play_interactive,
    run_series,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.resolved_command() {
        Command::Play {
            difficulty,
            side,
            first,
            second,
            log,
            seed,
        } => {
            let settings = PlaySettings::new(
                difficulty.or(*config.difficulty()),
                side,
                go_first_flag(first, second),
                log.unwrap_or_else(|| config.log_path_or_default()),
                seed.or(*config.seed()),
            );
            run_play(settings)
        }
        Command::Watch {
            games,
            x_difficulty,
            o_difficulty,
            seed,
            log,
        } => {
            let settings = SeriesSettings::new(
                games.unwrap_or_else(|| config.games_or_default()),
                x_difficulty,
                o_difficulty,
                seed.or(*config.seed()),
                log.or_else(|| config.log_path().clone()),
            );
            run_watch(settings)
        }
    }
}

/// Run one interactive game on the terminal
#[instrument]
fn run_play(settings: PlaySettings) -> Result<()> {
    info!("Starting interactive game");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    play_interactive(&settings, stdin, stdout)?;
    Ok(())
}

/// Run an AI-only series and print the tally
#[instrument]
fn run_watch(settings: SeriesSettings) -> Result<()> {
    info!("Starting AI series");
    let tally = run_series(&settings)?;
    println!("{} games played. {}", tally.total(), tally);
    Ok(())
}
