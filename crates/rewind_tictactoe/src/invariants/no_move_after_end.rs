//! Terminal invariant: nothing is played after a win or draw.

use super::Invariant;
use crate::History;
use crate::rules::status;

/// Invariant: only the last snapshot may be won or drawn.
pub struct NoMoveAfterEndInvariant;

impl Invariant<History> for NoMoveAfterEndInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        let earlier = snapshots.len().saturating_sub(1);
        snapshots[..earlier]
            .iter()
            .all(|snap| !status(snap.board()).is_over())
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Snapshot};

    fn top_row_win() -> Vec<Snapshot> {
        let moves = [
            (Position::TopLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::TopCenter, Mark::X),
            (Position::BottomLeft, Mark::O),
            (Position::TopRight, Mark::X),
        ];
        let mut snapshots = vec![Snapshot::initial()];
        for (pos, mark) in moves {
            let prev = snapshots[snapshots.len() - 1];
            snapshots.push(prev.advance(pos, mark));
        }
        snapshots
    }

    #[test]
    fn test_win_as_last_snapshot_holds() {
        let history = History::from_snapshots(top_row_win());
        assert!(NoMoveAfterEndInvariant::holds(&history));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut snapshots = top_row_win();
        let last = snapshots[snapshots.len() - 1];
        snapshots.push(last.advance(Position::BottomRight, Mark::O));
        let history = History::from_snapshots(snapshots);
        assert!(!NoMoveAfterEndInvariant::holds(&history));
    }
}
