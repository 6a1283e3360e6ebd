//! Scripted runs of the terminal front end.

use std::io::Cursor;
use tempfile::TempDir;

use strictly_tictactoe::{GameStatus, PersistenceStore, Session, Symbol, Terminal};

/// Runs the terminal over `script` and returns its output and session.
fn run_script(dir: &TempDir, script: &str) -> (String, Session) {
    let session = Session::new(PersistenceStore::in_dir(dir.path()));
    let mut output = Vec::new();
    let mut terminal = Terminal::new(Cursor::new(script.to_string()), &mut output, session);
    terminal.run().expect("Terminal I/O failed");
    let session = terminal.into_session();
    (String::from_utf8(output).expect("UTF-8 output"), session)
}

#[test]
fn test_exit_from_menu() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (output, session) = run_script(&dir, "3\n");
    assert!(output.contains("1. New Game\n2. Load Game\n3. Exit\n"));
    assert!(session.state().is_none());
}

#[test]
fn test_full_game_to_win() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let script = "1\nAlice\nBob\nx\n1\n5\n2\n6\n3\nn\n";
    let (output, session) = run_script(&dir, script);

    assert!(output.contains("Alice, choose your symbol (X/O): "));
    assert!(output.contains("Bob (O)'s turn."));
    assert!(output.contains("Alice wins!"));
    assert!(output.contains("Game Over. Play again? (y/n): "));
    assert_eq!(
        *session.state().expect("started").status(),
        GameStatus::Won(Symbol::X)
    );
    assert_eq!(session.store().read_results().expect("log").len(), 1);
}

#[test]
fn test_illegal_input_is_ignored() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let script = "1\nAlice\nBob\nO\n5\n5\n0\nhello\nq\n";
    let (_output, session) = run_script(&dir, script);

    let state = session.state().expect("started");
    assert_eq!(state.board().count(Symbol::O), 1);
    assert_eq!(state.board().count(Symbol::X), 0);
    assert_eq!(*state.turn(), Symbol::X);
}

#[test]
fn test_load_without_save_falls_back_to_new_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (output, session) = run_script(&dir, "2\nAlice\nBob\nX\nq\n");

    assert!(output.contains("No saved game found. Starting a new game."));
    assert_eq!(
        session.state().expect("started").players().first().name(),
        "Alice"
    );
}

#[test]
fn test_save_then_load_in_next_run() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let (output, _) = run_script(&dir, "1\nAlice\nBob\nX\n5\ns\nq\n");
    assert!(output.contains("Game saved successfully!"));

    let (output, session) = run_script(&dir, "2\n1\nq\n");
    assert!(output.contains("Bob (O)'s turn."));
    let board = session.state().expect("loaded").board().clone();
    assert_eq!(board.count(Symbol::X), 1);
    assert_eq!(board.count(Symbol::O), 1);
}

#[test]
fn test_stored_names_are_offered_as_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    run_script(&dir, "1\nAlice\nBob\nX\nq\n");

    let (output, session) = run_script(&dir, "1\n\n\nO\nq\n");
    assert!(output.contains("Player 1 name [Alice]: "));
    let players = session.state().expect("started").players().clone();
    assert_eq!(players.second().name(), "Bob");
    assert_eq!(*players.first().symbol(), Symbol::O);
}

#[test]
fn test_play_again_resets_board() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let script = "1\nAlice\nBob\nX\n1\n5\n2\n6\n3\ny\nq\n";
    let (_output, session) = run_script(&dir, script);

    let state = session.state().expect("started");
    assert_eq!(state.board().empty_cells().len(), 9);
    assert_eq!(*state.status(), GameStatus::InProgress);
}
