//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win the game when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Returns the three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// The eight winning lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When a board holds
/// more than one complete line the earliest one here is reported.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first complete line and the mark that fills it.
pub(crate) fn completed_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == Square::Occupied(mark)
                    && board.get(c) == Square::Occupied(mark) =>
            {
                Some((mark, line))
            }
            _ => None,
        }
    })
}

/// Returns the first winning line on the board, if any.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<Line> {
    completed_line(board).map(|(_, line)| line)
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark has three in a row, `None` otherwise.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    completed_line(board).map(|(mark, _)| mark)
}
