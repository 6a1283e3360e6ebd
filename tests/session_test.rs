//! Tests for the session flow: start, resume, play, record, save.

use std::fs;
use tempfile::TempDir;

use strictly_tictactoe::{
    GameStatus, IllegalMove, MoveOutcome, PersistErrorKind, PersistenceStore, Players, Resume,
    Session, Symbol,
};

fn setup_session() -> (TempDir, Session) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let session = Session::new(PersistenceStore::in_dir(dir.path()));
    (dir, session)
}

fn players() -> Players {
    Players::with_choice("Alice", "Bob", Symbol::X).expect("valid players")
}

fn results_text(session: &Session) -> String {
    fs::read_to_string(session.store().results_path()).unwrap_or_default()
}

#[test]
fn test_start_new_saves_players() {
    let (_dir, mut session) = setup_session();
    session.start_new(players(), Symbol::X);

    assert_eq!(session.store().load_players().expect("saved"), players());
    assert_eq!(session.status_line().as_deref(), Some("Alice (X)'s turn."));
}

#[test]
fn test_win_appends_one_record() {
    let (_dir, mut session) = setup_session();
    session.start_new(players(), Symbol::X);

    for index in [0, 4, 1, 5] {
        session.play(index).expect("legal move");
        assert!(results_text(&session).is_empty());
    }
    let result = session.play(2).expect("legal move");
    assert_eq!(*result.outcome(), MoveOutcome::Win(Symbol::X));
    assert_eq!(session.status_line().as_deref(), Some("Alice wins!"));

    assert_eq!(session.play(8), Err(IllegalMove::GameOver));
    let log = results_text(&session);
    assert_eq!(log.matches("Result: ").count(), 1);
    assert!(log.contains("Player 1: Alice (X)\nPlayer 2: Bob (O)\nResult: Alice wins!\n"));
}

#[test]
fn test_draw_is_recorded() {
    let (_dir, mut session) = setup_session();
    session.start_new(players(), Symbol::X);
    for index in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        session.play(index).expect("legal move");
    }
    assert_eq!(session.status_line().as_deref(), Some("It's a draw!"));
    assert!(results_text(&session).contains("Result: It's a draw!\n"));
}

#[test]
fn test_resume_without_save_is_fresh() {
    let (_dir, mut session) = setup_session();
    match session.resume() {
        Resume::Fresh(e) => assert_eq!(e.kind(), PersistErrorKind::NotFound),
        Resume::Loaded => panic!("Nothing was saved"),
    }
    assert!(session.state().is_none());
}

#[test]
fn test_resume_with_garbage_is_fresh() {
    let (_dir, mut session) = setup_session();
    fs::write(session.store().saved_game_path(), "not a save\n").expect("Write failed");
    assert!(matches!(session.resume(), Resume::Fresh(_)));
}

#[test]
fn test_save_and_resume_in_new_session() {
    let (dir, mut session) = setup_session();
    session.start_new(players(), Symbol::O);
    session.play(4).expect("legal move");
    session.save().expect("Save failed");

    let mut resumed = Session::new(PersistenceStore::in_dir(dir.path()));
    assert!(matches!(resumed.resume(), Resume::Loaded));
    assert_eq!(resumed.state(), session.state());
    assert_eq!(resumed.status_line().as_deref(), Some("Alice (X)'s turn."));

    let result = resumed.play(0).expect("legal move");
    assert_eq!(*result.state().status(), GameStatus::InProgress);
}

#[test]
fn test_play_again_keeps_players() {
    let (_dir, mut session) = setup_session();
    session.start_new(players(), Symbol::O);
    session.play(4).expect("legal move");

    let state = session.play_again().expect("game started");
    assert!(state.board().empty_cells().len() == 9);
    assert_eq!(*state.turn(), Symbol::X);
    assert_eq!(state.players(), &players());
}

#[test]
fn test_save_without_game_is_noop() {
    let (_dir, session) = setup_session();
    session.save().expect("Nothing to save");
    assert!(!session.store().saved_game_path().exists());
}
