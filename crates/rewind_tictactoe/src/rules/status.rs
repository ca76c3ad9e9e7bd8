//! Outcome classification for a board.

use super::draw::is_full;
use super::win::{Line, completed_line};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game, derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the mark moves next.
    InProgress(Mark),
    /// A mark completed a line.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The first completed line.
        line: Line,
    },
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the mark to move, if the game is still going.
    pub fn next_mark(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Checks whether `pos` is part of the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(mark) => write!(f, "Next player: {}", mark),
            GameStatus::Won { winner, .. } => write!(f, "Winner: {}", winner),
            GameStatus::Draw => write!(f, "Draw! No winner."),
        }
    }
}

/// Classifies a board as in progress, won, or drawn.
///
/// The mark to move is X when both marks have been played equally often and
/// O otherwise, which matches turn parity for every board reachable by play.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some((winner, line)) = completed_line(board) {
        return GameStatus::Won { winner, line };
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    if board.count(Mark::X) > board.count(Mark::O) {
        GameStatus::InProgress(Mark::O)
    } else {
        GameStatus::InProgress(Mark::X)
    }
}
