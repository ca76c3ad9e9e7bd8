//! Contract-based validation for playing a move.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style {P} action {Q}.

use crate::error::MoveError;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::session::GameSession;
use crate::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// The value a passing precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Resolves the index to a position.
    pub fn check(cell: usize) -> Result<Position, MoveError> {
        Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))
    }
}

/// Precondition: the board at the cursor is neither won nor drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` on a finished board.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.current_status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` when a mark is already there.
    pub fn check(pos: Position, session: &GameSession) -> Result<(), MoveError> {
        if session.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the cell exists, the game is live, the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, returning the target position.
    #[instrument(skip(session))]
    pub fn check(cell: usize, session: &GameSession) -> Result<Position, MoveError> {
        let pos = CellOnBoard::check(cell)?;
        GameNotOver::check(session)?;
        SquareIsEmpty::check(pos, session)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for playing a move on a session.
///
/// Preconditions:
/// - Cell is on the board
/// - Board at the cursor is still in progress
/// - Square is empty
///
/// Postconditions:
/// - History satisfies every [`HistoryInvariants`] member
/// - Cursor points at the new last snapshot
/// - History grew to exactly `before.cursor + 2` entries
pub struct PlayContract;

impl Contract<GameSession, usize> for PlayContract {
    type Checked = Position;

    fn pre(session: &GameSession, cell: &usize) -> Result<Position, MoveError> {
        LegalMove::check(*cell, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        HistoryInvariants::check_all(after.history()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "History invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let len = after.history().len();
        if after.cursor() + 1 != len || len != before.cursor() + 2 {
            warn!(
                cursor = after.cursor(),
                history_len = len,
                "Cursor does not point at the new move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: cursor must point at the new move".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let session = GameSession::new();
        assert_eq!(PlayContract::pre(&session, &4), Ok(Position::Center));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let session = GameSession::new();
        assert_eq!(PlayContract::pre(&session, &9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut session = GameSession::new();
        session.play_move(4);
        assert_eq!(
            PlayContract::pre(&session, &4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let session = GameSession::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(PlayContract::pre(&session, &8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.play_move(4);
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_unmoved_cursor() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.play_move(4);
        after.jump_to(0).unwrap();
        assert!(matches!(
            PlayContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
