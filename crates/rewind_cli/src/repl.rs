//! Line-oriented interactive play.

use crate::render::render_session;
use rewind_tictactoe::{GameSession, Position};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  1-9          place the next mark on that square
  play <cell>  same, by number (1-9) or name (e.g. center, top-left)
  jump <n>     go back to move n (0 is game start)
  sort         toggle move list order
  restart      start over
  help         show this help
  quit         leave";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell with this index (0-8).
    Play(usize),
    /// Jump to this history index.
    Jump(usize),
    /// Toggle move list order.
    Sort,
    /// Start over.
    Restart,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// Reason a line of input could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Type a command, or 'help'")]
    Empty,
    /// The first word is not a command.
    #[display("Unknown command '{}', try 'help'", _0)]
    Unknown(String),
    /// The command needs an argument.
    #[display("'{}' needs an argument", _0)]
    MissingArgument(&'static str),
    /// The cell is neither 1-9 nor a square name.
    #[display("'{}' is not a square (use 1-9 or a name like 'center')", _0)]
    BadCell(String),
    /// The history index is not a number.
    #[display("'{}' is not a move number", _0)]
    BadIndex(String),
}

impl std::error::Error for CommandError {}

fn parse_cell(arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n @ 1..=9) => Ok(n - 1),
        Ok(_) => Err(CommandError::BadCell(arg.to_string())),
        Err(_) => Position::from_label(arg)
            .map(Position::to_index)
            .ok_or_else(|| CommandError::BadCell(arg.to_string())),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();

        match head.to_lowercase().as_str() {
            "play" | "p" => {
                let arg = arg.ok_or(CommandError::MissingArgument("play"))?;
                parse_cell(arg).map(Command::Play)
            }
            "jump" | "j" => {
                let arg = arg.ok_or(CommandError::MissingArgument("jump"))?;
                arg.parse::<usize>()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::BadIndex(arg.to_string()))
            }
            "sort" => Ok(Command::Sort),
            "restart" => Ok(Command::Restart),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other if other.chars().all(|c| c.is_ascii_digit()) => parse_cell(other).map(Command::Play),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// The session is printed to `out` at start and after every command that
/// can change it. Refused moves and jumps are reported and leave the
/// session as it was.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
    highlight: bool,
) -> std::io::Result<()> {
    writeln!(out, "{}", render_session(session, highlight))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(command) => {
                debug!(?command, "Applying command");
                if let Some(message) = apply(session, command) {
                    writeln!(out, "{}", message)?;
                }
                writeln!(out, "{}", render_session(session, highlight))?;
            }
            Err(error) => writeln!(out, "{}", error)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// Applies a state-changing command, returning a message if it was refused.
fn apply(session: &mut GameSession, command: Command) -> Option<String> {
    match command {
        Command::Play(cell) => session
            .try_play_move(cell)
            .err()
            .map(|e| format!("Move refused: {}", e)),
        Command::Jump(index) => session
            .jump_to(index)
            .err()
            .map(|e| format!("Jump refused: {}", e)),
        Command::Sort => {
            session.toggle_move_order();
            None
        }
        Command::Restart => {
            session.restart();
            None
        }
        Command::Help | Command::Quit => None,
    }
}
