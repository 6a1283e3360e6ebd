//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe with saved games and a results log
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the store configuration file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Directory holding the game files (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Print the saved game
    Show {
        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print finished games from the results log
    History,
}
