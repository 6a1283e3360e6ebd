//! Line-oriented text formats for the players file, saved game, and results log.
//!
//! The layouts are fixed; existing save files must keep loading:
//!
//! ```text
//! Player 1: Alice (X)
//! Player 2: Bob (O)
//! Current Player: X
//! X.O
//! .X.
//! ..O
//! ```
//!
//! Names may contain spaces. A player line is split on its last `" ("`.

use super::{PersistError, RecordedOutcome, ResultRecord};
use crate::game::{Board, CELL_COUNT, Cell, GameState, Player, Players, Symbol};
use chrono::NaiveDateTime;
use tracing::instrument;

/// Timestamp layout of the `Date and Time:` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line closing each block in the results log.
pub const RESULT_SEPARATOR: &str = "----------------------------------------------------";

const DATE_PREFIX: &str = "Date and Time: ";
const CURRENT_PREFIX: &str = "Current Player: ";
const RESULT_PREFIX: &str = "Result: ";
const EMPTY_CELL: char = '.';

fn player_prefix(number: u8) -> String {
    format!("Player {}: ", number)
}

/// Formats `Player <number>: <name> (<symbol>)`.
pub fn player_line(number: u8, player: &Player) -> String {
    format!("{}{}", player_prefix(number), player.label())
}

/// Parses a line written by [`player_line`].
///
/// # Errors
///
/// Returns a malformed error if the prefix, the parenthesised symbol,
/// or the name is missing.
#[instrument]
pub fn parse_player_line(number: u8, line: &str) -> Result<Player, PersistError> {
    let body = line
        .strip_prefix(player_prefix(number).as_str())
        .ok_or_else(|| PersistError::malformed(format!("expected 'Player {}:' in {:?}", number, line)))?;
    let (name, tail) = body
        .rsplit_once(" (")
        .ok_or_else(|| PersistError::malformed(format!("missing symbol in {:?}", line)))?;
    let symbol = tail
        .strip_suffix(')')
        .and_then(single_char)
        .and_then(Symbol::from_char)
        .ok_or_else(|| PersistError::malformed(format!("bad symbol in {:?}", line)))?;
    Player::new(name, symbol).map_err(|e| PersistError::malformed(e.to_string()))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_pair(first: &str, second: &str) -> Result<Players, PersistError> {
    let first = parse_player_line(1, first)?;
    let second = parse_player_line(2, second)?;
    Players::new(first, second).map_err(|e| PersistError::malformed(e.to_string()))
}

/// Lines without trailing whitespace or carriage returns.
fn clean_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end)
}

/// Encodes the two-line players file.
pub fn encode_players(players: &Players) -> String {
    format!(
        "{}\n{}\n",
        player_line(1, players.first()),
        player_line(2, players.second())
    )
}

/// Decodes the players file.
///
/// # Errors
///
/// Returns a malformed error if either line is missing or unreadable.
#[instrument(skip(text))]
pub fn decode_players(text: &str) -> Result<Players, PersistError> {
    let mut lines = clean_lines(text);
    let (Some(first), Some(second)) = (lines.next(), lines.next()) else {
        return Err(PersistError::malformed("players file needs two lines"));
    };
    parse_pair(first, second)
}

/// Encodes the saved-game file: three header lines and three board rows.
pub fn encode_game(state: &GameState) -> String {
    let mut out = encode_players(state.players());
    out.push_str(CURRENT_PREFIX);
    out.push(state.turn().as_char());
    out.push('\n');
    for row in state.board().cells().chunks(3) {
        out.extend(row.iter().map(|cell| match cell {
            Cell::Empty => EMPTY_CELL,
            Cell::Marked(symbol) => symbol.as_char(),
        }));
        out.push('\n');
    }
    out
}

/// Decodes the saved-game file.
///
/// Trailing blank lines are ignored. The game status is recomputed from
/// the board, so a saved finished game loads as finished.
///
/// # Errors
///
/// Returns a malformed error for a missing header, a bad symbol, or a
/// board that is not three rows of three cells.
#[instrument(skip(text))]
pub fn decode_game(text: &str) -> Result<GameState, PersistError> {
    let mut lines = clean_lines(text);
    let (Some(first), Some(second), Some(current)) = (lines.next(), lines.next(), lines.next())
    else {
        return Err(PersistError::malformed("saved game needs three header lines"));
    };
    let players = parse_pair(first, second)?;

    let turn = current
        .strip_prefix(CURRENT_PREFIX)
        .and_then(single_char)
        .and_then(Symbol::from_char)
        .ok_or_else(|| PersistError::malformed(format!("bad current player line {:?}", current)))?;

    let rows: Vec<&str> = lines.filter(|line| !line.is_empty()).collect();
    if rows.len() != 3 {
        return Err(PersistError::malformed(format!(
            "expected 3 board rows, found {}",
            rows.len()
        )));
    }

    let mut cells = [Cell::Empty; CELL_COUNT];
    let mut index = 0;
    for row in rows {
        if row.chars().count() != 3 {
            return Err(PersistError::malformed(format!("board row {:?} is not 3 cells", row)));
        }
        for c in row.chars() {
            cells[index] = match c {
                EMPTY_CELL => Cell::Empty,
                other => Cell::Marked(Symbol::from_char(other).ok_or_else(|| {
                    PersistError::malformed(format!("unknown cell {:?}", other))
                })?),
            };
            index += 1;
        }
    }

    Ok(GameState::restore(players, Board::from_cells(cells), turn))
}

/// Encodes one results-log block, including the closing separator.
pub fn encode_result(record: &ResultRecord) -> String {
    format!(
        "{}{}\n{}\n{}\n{}{}\n{}\n",
        DATE_PREFIX,
        record.played_at().format(TIMESTAMP_FORMAT),
        player_line(1, record.player1()),
        player_line(2, record.player2()),
        RESULT_PREFIX,
        record.result_text(),
        RESULT_SEPARATOR
    )
}

/// Splits the results log into blocks of lines, one per separator.
///
/// Text after the last separator is returned as a final block.
pub fn split_results(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in clean_lines(text) {
        if line == RESULT_SEPARATOR {
            blocks.push(std::mem::take(&mut current));
        } else if !line.is_empty() {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parses one block produced by [`split_results`].
///
/// # Errors
///
/// Returns a malformed error if the block is not the four expected lines.
#[instrument(skip(block))]
pub fn decode_result(block: &[&str]) -> Result<ResultRecord, PersistError> {
    let [date, first, second, result] = block else {
        return Err(PersistError::malformed(format!(
            "result block has {} lines, expected 4",
            block.len()
        )));
    };

    let played_at = date
        .strip_prefix(DATE_PREFIX)
        .ok_or_else(|| PersistError::malformed(format!("bad date line {:?}", date)))
        .and_then(|stamp| {
            NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
                .map_err(|e| PersistError::malformed(format!("bad timestamp {:?}: {}", stamp, e)))
        })?;
    let players = parse_pair(first, second)?;

    let text = result
        .strip_prefix(RESULT_PREFIX)
        .ok_or_else(|| PersistError::malformed(format!("bad result line {:?}", result)))?;
    let outcome = if text == "It's a draw!" {
        RecordedOutcome::Draw
    } else {
        let name = text
            .strip_suffix(" wins!")
            .ok_or_else(|| PersistError::malformed(format!("unknown result {:?}", text)))?;
        [players.first(), players.second()]
            .into_iter()
            .find(|player| player.name() == name)
            .map(|player| RecordedOutcome::Win(*player.symbol()))
            .ok_or_else(|| PersistError::malformed(format!("winner {:?} is not a player", name)))?
    };

    Ok(ResultRecord::new(
        played_at,
        players.first().clone(),
        players.second().clone(),
        outcome,
    ))
}
