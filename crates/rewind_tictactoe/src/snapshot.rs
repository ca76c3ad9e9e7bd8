//! Immutable points in game history.

use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A board together with the move that produced it.
///
/// Snapshots are never modified after construction; playing a move builds
/// a new snapshot from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    placed: Option<Position>,
}

impl Snapshot {
    /// The empty board at game start.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// Builds the snapshot that follows `self` when `mark` is placed at `pos`.
    #[instrument(skip(self))]
    pub fn advance(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with_mark(pos, mark),
            placed: Some(pos),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the position played to reach this board, or `None` at game start.
    pub fn placed(&self) -> Option<Position> {
        self.placed
    }

    /// Returns the mark played to reach this board, or `None` at game start.
    pub fn mark(&self) -> Option<Mark> {
        self.placed.and_then(|pos| self.board.get(pos).mark())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, placed: Option<Position>) -> Self {
        Self { board, placed }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot() {
        let snap = Snapshot::initial();
        assert_eq!(snap.board(), &Board::new());
        assert_eq!(snap.placed(), None);
        assert_eq!(snap.mark(), None);
    }

    #[test]
    fn test_advance_records_move() {
        let start = Snapshot::initial();
        let next = start.advance(Position::Center, Mark::X);

        assert_eq!(next.placed(), Some(Position::Center));
        assert_eq!(next.mark(), Some(Mark::X));
        assert_eq!(start.board().occupied(), 0);
        assert_eq!(next.board().occupied(), 1);
    }
}
