//! Error types for playing and navigating a game.

use crate::Position;

/// Reason a move was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the cursor is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Reason a history jump was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NavigationError {
    /// The index is past the end of history.
    #[display("History index {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for NavigationError {}
