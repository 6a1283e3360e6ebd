//! Property tests for the engine and the saved-game format.

use proptest::prelude::*;
use strictly_tictactoe::{
    GameEngine, GameState, IllegalMove, Players, Symbol, decode_game, encode_game,
};

/// Plays `moves` (indices taken modulo the remaining empty cells) and
/// returns the engine, stopping early if the game ends.
fn engine_after(moves: &[usize], first: Symbol) -> GameEngine {
    let players = Players::with_choice("Ann Lee", "Ben", Symbol::X).unwrap();
    let mut engine = GameEngine::new();
    engine.new_game(players, first);
    for &pick in moves {
        let state = engine.state().unwrap();
        if state.is_terminal() {
            break;
        }
        let empty = state.board().empty_cells();
        let index = empty[pick % empty.len()];
        engine.submit_move(index).unwrap();
    }
    engine
}

fn any_symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::X), Just(Symbol::O)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Occupied or out-of-range cells are always rejected without mutation.
    #[test]
    fn illegal_move_never_mutates(
        moves in prop::collection::vec(0usize..9, 0..9),
        first in any_symbol(),
        target in 0usize..20,
    ) {
        let mut engine = engine_after(&moves, first);
        let before: GameState = engine.state().unwrap().clone();
        let legal = !before.is_terminal() && before.board().is_empty_at(target);
        prop_assume!(!legal);

        let result = engine.submit_move(target);
        prop_assert!(matches!(result, Err(IllegalMove::Board(_)) | Err(IllegalMove::GameOver)));
        prop_assert_eq!(engine.state().unwrap(), &before);
    }

    /// Saving and loading reproduces the board, turn, players, and status.
    #[test]
    fn saved_game_roundtrip(
        moves in prop::collection::vec(0usize..9, 0..9),
        first in any_symbol(),
    ) {
        let engine = engine_after(&moves, first);
        let state = engine.state().unwrap();
        let loaded = decode_game(&encode_game(state)).unwrap();
        prop_assert_eq!(&loaded, state);
    }

    /// Mark counts never drift more than one apart.
    #[test]
    fn turns_alternate(
        moves in prop::collection::vec(0usize..9, 0..9),
        first in any_symbol(),
    ) {
        let engine = engine_after(&moves, first);
        let board = engine.state().unwrap().board();
        let firsts = board.count(first);
        let seconds = board.count(first.other());
        prop_assert!(firsts == seconds || firsts == seconds + 1);
    }
}
