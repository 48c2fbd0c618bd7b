//! Command-line interface for multi_tictactoe.

use clap::{Args, Parser, Subcommand};
use multi_tictactoe::PartialSettings;
use std::path::PathBuf;

/// Multiplayer Tic-Tac-Toe - 3 to 10 players on a labelled console board
#[derive(Parser, Debug)]
#[command(name = "multi_tictactoe")]
#[command(about = "Multiplayer tic-tac-toe for the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game; missing settings are prompted for
    Play(PlayArgs),

    /// Print an empty board for the given number of players
    Board {
        /// Number of players (3-10)
        #[arg(short, long)]
        players: usize,
    },
}

/// Settings for `play`. Flags override values from `--config`.
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// TOML file with `number_of_players`, `tokens` and `win_length`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of players (3-10)
    #[arg(short, long)]
    pub players: Option<usize>,

    /// Player tokens in turn order, one letter each (e.g. XYZ)
    #[arg(short, long)]
    pub tokens: Option<String>,

    /// Consecutive tokens needed to win (3 to players + 1)
    #[arg(short, long)]
    pub win_length: Option<usize>,
}

impl PlayArgs {
    /// Settings given on the command line.
    pub fn overrides(&self) -> PartialSettings {
        PartialSettings {
            number_of_players: self.players,
            tokens: self.tokens.clone(),
            win_length: self.win_length,
        }
    }
}
