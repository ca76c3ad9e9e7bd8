//! Start invariant: history opens with the empty board.

use super::Invariant;
use crate::{Board, History};

/// Invariant: index 0 is the empty board with no move recorded.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history
            .get(0)
            .is_some_and(|first| first.placed().is_none() && *first.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Snapshot};

    #[test]
    fn test_new_history_holds() {
        assert!(StartsEmptyInvariant::holds(&History::new()));
    }

    #[test]
    fn test_marked_first_board_violates() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        let history = History::from_snapshots(vec![Snapshot::from_parts(board, None)]);
        assert!(!StartsEmptyInvariant::holds(&history));
    }

    #[test]
    fn test_empty_history_violates() {
        assert!(!StartsEmptyInvariant::holds(&History::from_snapshots(Vec::new())));
    }
}
