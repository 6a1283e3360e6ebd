//! Line-based terminal front end.
//!
//! Reads commands from any [`BufRead`] and writes prompts to any [`Write`],
//! so a whole game can be scripted.

use crate::game::{Players, Symbol};
use crate::session::{Resume, Session};
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Entries of the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Enter names and symbols, then play.
    NewGame,
    /// Continue from the saved-game file.
    LoadGame,
    /// Leave.
    Exit,
}

impl MenuChoice {
    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NewGame => "New Game",
            Self::LoadGame => "Load Game",
            Self::Exit => "Exit",
        }
    }

    /// Parses a 1-based menu number.
    pub fn from_number(s: &str) -> Option<Self> {
        let n = s.trim().parse::<usize>().ok()?;
        Self::iter().nth(n.checked_sub(1)?)
    }
}

/// A command typed during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnCommand {
    Move(usize),
    Save,
    Quit,
}

impl TurnCommand {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "s" | "S" => Some(Self::Save),
            "q" | "Q" => Some(Self::Quit),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Some(Self::Move(n - 1)),
                _ => None,
            },
        }
    }
}

/// Terminal driver for a [`Session`].
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Wraps a session with input and output streams.
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Returns the session, e.g. to inspect it after a scripted run.
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Shows the menu and plays until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if the terminal streams fail.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        let started = loop {
            writeln!(self.output, "Choose an option:")?;
            for (n, choice) in MenuChoice::iter().enumerate() {
                writeln!(self.output, "{}. {}", n + 1, choice.label())?;
            }
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match MenuChoice::from_number(&line) {
                Some(MenuChoice::NewGame) => break self.setup_new_game()?,
                Some(MenuChoice::LoadGame) => match self.session.resume() {
                    Resume::Loaded => break true,
                    Resume::Fresh(e) => {
                        debug!(error = %e, "Falling back to new game");
                        writeln!(self.output, "No saved game found. Starting a new game.")?;
                        break self.setup_new_game()?;
                    }
                },
                Some(MenuChoice::Exit) => return Ok(()),
                None => continue,
            }
        };
        if started {
            self.play_loop()?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a usable value is entered. `None` on end of input.
    fn prompt_name(&mut self, number: u8, default: Option<&str>) -> io::Result<Option<String>> {
        loop {
            match default {
                Some(name) => write!(self.output, "Player {} name [{}]: ", number, name)?,
                None => write!(self.output, "Player {} name: ", number)?,
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match (line.is_empty(), default) {
                (false, _) => return Ok(Some(line)),
                (true, Some(name)) => return Ok(Some(name.to_string())),
                (true, None) => continue,
            }
        }
    }

    fn prompt_symbol(&mut self, name: &str) -> io::Result<Option<Symbol>> {
        let options = Symbol::iter()
            .map(|symbol| symbol.to_string())
            .collect::<Vec<_>>()
            .join("/");
        loop {
            write!(self.output, "{}, choose your symbol ({}): ", name, options)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let mut chars = line.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && let Some(symbol) = Symbol::from_char(c.to_ascii_uppercase())
            {
                return Ok(Some(symbol));
            }
        }
    }

    /// Runs the names and symbol dialogs. Returns false on end of input.
    fn setup_new_game(&mut self) -> io::Result<bool> {
        let stored = self.session.store().load_players().ok();
        loop {
            let Some(first) = self.prompt_name(1, stored.as_ref().map(|p| p.first().name().as_str()))? else {
                return Ok(false);
            };
            let Some(second) = self.prompt_name(2, stored.as_ref().map(|p| p.second().name().as_str()))? else {
                return Ok(false);
            };
            let Some(symbol) = self.prompt_symbol(&first)? else {
                return Ok(false);
            };
            match Players::with_choice(first, second, symbol) {
                Ok(players) => {
                    self.session.start_new(players, symbol);
                    return Ok(true);
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn show_board(&mut self) -> io::Result<()> {
        if let Some(state) = self.session.state() {
            writeln!(self.output, "{}", state.board().display())?;
        }
        if let Some(status) = self.session.status_line() {
            writeln!(self.output, "{}", status)?;
        }
        Ok(())
    }

    fn play_loop(&mut self) -> io::Result<()> {
        loop {
            self.show_board()?;
            if self.session.state().is_some_and(|state| state.is_terminal()) {
                write!(self.output, "Game Over. Play again? (y/n): ")?;
                match self.read_line()?.as_deref() {
                    Some("y" | "Y") => {
                        // A running game always exists here.
                        let _ = self.session.play_again();
                        continue;
                    }
                    _ => return Ok(()),
                }
            }

            write!(self.output, "Move (1-9), s = save, q = quit: ")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match TurnCommand::parse(&line) {
                Some(TurnCommand::Move(index)) => {
                    if let Err(e) = self.session.play(index) {
                        debug!(error = %e, "Ignoring illegal move");
                    }
                }
                Some(TurnCommand::Save) => match self.session.save() {
                    Ok(()) => writeln!(self.output, "Game saved successfully!")?,
                    Err(e) => writeln!(self.output, "Could not save game: {}", e.message)?,
                },
                Some(TurnCommand::Quit) => return Ok(()),
                None => {}
            }
        }
    }
}
