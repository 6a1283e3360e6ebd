//! Strictly Tic-Tac-Toe - terminal CLI
//!
//! Plays games in the terminal and inspects the saved files.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::Path;
use strictly_tictactoe::{PersistenceStore, Session, StoreConfig, Terminal, status_line};
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

    let mut config = load_store_config(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        info!(dir = %dir.display(), "Overriding data directory");
        config = config.with_data_dir(dir);
    }
    let store = PersistenceStore::new(&config);

    match cli.command {
        Command::Play => run_play(store),
        Command::Show { json } => run_show(&store, json),
        Command::History => run_history(&store),
    }
}

/// Loads the store config, falling back to defaults when the file is absent.
#[instrument]
fn load_store_config(path: &Path) -> Result<StoreConfig> {
    if path.exists() {
        Ok(StoreConfig::from_file(path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        Ok(StoreConfig::default())
    }
}

/// Run the interactive game
fn run_play(store: PersistenceStore) -> Result<()> {
    info!("Starting terminal game");
    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout(), Session::new(store));
    terminal.run().context("Terminal I/O failed")?;
    Ok(())
}

/// Print the saved game
fn run_show(store: &PersistenceStore, json: bool) -> Result<()> {
    let state = store
        .load_game()
        .with_context(|| format!("No saved game at {}", store.saved_game_path().display()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", state.board().display());
        println!("{}", status_line(&state));
    }
    Ok(())
}

/// Print the results log
fn run_history(store: &PersistenceStore) -> Result<()> {
    let records = store.read_results()?;
    if records.is_empty() {
        println!("No finished games recorded.");
    }
    for record in &records {
        println!(
            "{}  {} vs {}  {}",
            record.played_at().format(strictly_tictactoe::TIMESTAMP_FORMAT),
            record.player1().label(),
            record.player2().label(),
            record.result_text()
        );
    }
    Ok(())
}
