//! tictactoe_board - terminal tic-tac-toe

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_board::{BoardConfig, parse_positions, run_moves, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = BoardConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&config),
        Command::Play { cells, json } => {
            initialize_tracing(&config);
            run_play(&cells, json)
        }
    }
}

/// Headless mode: apply the cells and print the outcome.
#[instrument]
fn run_play(cells: &[usize], json: bool) -> Result<()> {
    let positions = parse_positions(cells)?;
    let report = run_moves(&positions);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render_text());
    }

    info!(status = %report.view.outcome(), "Done");
    Ok(())
}

/// Logs to stderr so stdout stays clean for the board or JSON.
fn initialize_tracing(config: &BoardConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
