//! Rules engine and time-travel history for tic-tac-toe.
//!
//! The crate has two layers:
//!
//! - **Rules** ([`rules`]): pure functions that classify a [`Board`] as
//!   in progress, won (with the winning [`Line`]), or drawn.
//! - **Session** ([`GameSession`]): the ordered [`History`] of immutable
//!   [`Snapshot`]s, a cursor into it, and move application.
//!
//! Rendering is left to the caller. A front end reads
//! [`GameSession::current_board`], [`GameSession::current_status`] and
//! [`GameSession::move_list`], and turns input into
//! [`GameSession::play_move`] and [`GameSession::jump_to`] calls.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, GameStatus, Mark};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     session.play_move(cell);
//! }
//! assert_eq!(session.current_status().winner(), Some(Mark::X));
//!
//! // Step back and play a different line.
//! session.jump_to(2).unwrap();
//! session.play_move(8);
//! assert_eq!(session.history().len(), 4);
//! assert!(matches!(session.current_status(), GameStatus::InProgress(Mark::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

// Crate-level exports - Board model
pub use position::{Coordinates, Position};
pub use types::{Board, Mark, Square};

// Crate-level exports - Rules
pub use rules::{GameStatus, LINES, Line, is_draw, is_full, status, winner, winning_line};

// Crate-level exports - History and session
pub use history::History;
pub use move_list::{MoveEntry, MoveOrder, describe};
pub use session::GameSession;
pub use snapshot::Snapshot;

// Crate-level exports - Contracts and errors
pub use contracts::{CellOnBoard, Contract, GameNotOver, LegalMove, PlayContract, SquareIsEmpty};
pub use error::{MoveError, NavigationError};
pub use invariants::{
    AlternatingTurnInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterEndInvariant, SingleStepInvariant, StartsEmptyInvariant,
};
