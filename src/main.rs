//! Multiplayer Tic-Tac-Toe - console entrypoint.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use multi_tictactoe::{Console, GameStatus, Grid, PartialSettings, check_player_count};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Board { players } => run_board(players),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(args: PlayArgs) -> Result<()> {
    let file = match &args.config {
        Some(path) => PartialSettings::from_file(path)?,
        None => PartialSettings::default(),
    };
    let overrides = file.merge(args.overrides());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let status = console.run(overrides)?;

    match status {
        GameStatus::Won(token) => info!(%token, "Game finished with a winner"),
        GameStatus::Draw => info!("Game finished in a draw"),
        GameStatus::InProgress => {}
    }
    Ok(())
}

/// Print an empty labelled board
#[instrument]
fn run_board(players: usize) -> Result<()> {
    check_player_count(players)?;
    println!("{}", Grid::new(players));
    Ok(())
}
