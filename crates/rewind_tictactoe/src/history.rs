//! Linear history of snapshots with truncate-on-branch.

use crate::Snapshot;
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered snapshots from game start to the latest move.
///
/// Always holds at least the initial empty-board snapshot at index 0.
/// Snapshots are only ever appended, or dropped from the end when play
/// resumes from an earlier point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // The vector is created non-empty and `branch` keeps index 0.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Returns all snapshots in play order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates snapshots in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Keeps snapshots `0..=from`, appends `snapshot`, and returns its index.
    ///
    /// Anything after `from` is discarded. `from` is clamped to the last
    /// index so the initial snapshot always survives.
    #[instrument(skip(self, snapshot), fields(history_len = self.snapshots.len()))]
    pub(crate) fn branch(&mut self, from: usize, snapshot: Snapshot) -> usize {
        let keep = from.min(self.snapshots.len() - 1) + 1;
        let dropped = self.snapshots.len() - keep;
        if dropped > 0 {
            debug!(dropped, "Discarding future snapshots");
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.snapshots.len() - 1
    }

    /// Resets to the initial snapshot.
    pub(crate) fn reset(&mut self) {
        self.snapshots.truncate(1);
    }

    #[cfg(test)]
    pub(crate) fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_history_has_initial_snapshot() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.latest(), &Snapshot::initial());
    }

    #[test]
    fn test_branch_appends_at_end() {
        let mut history = History::new();
        let next = history.latest().advance(Position::Center, Mark::X);

        assert_eq!(history.branch(0, next), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), &next);
    }

    #[test]
    fn test_branch_truncates_future() {
        let mut history = History::new();
        let first = history.latest().advance(Position::TopLeft, Mark::X);
        history.branch(0, first);
        let second = first.advance(Position::Center, Mark::O);
        history.branch(1, second);
        let third = second.advance(Position::TopCenter, Mark::X);
        history.branch(2, third);
        assert_eq!(history.len(), 4);

        let replacement = first.advance(Position::BottomRight, Mark::O);
        assert_eq!(history.branch(1, replacement), 2);
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(1), Some(&first));
        assert_eq!(history.latest(), &replacement);
    }

    #[test]
    fn test_reset_keeps_initial() {
        let mut history = History::new();
        let next = history.latest().advance(Position::Center, Mark::X);
        history.branch(0, next);
        history.reset();
        assert_eq!(history, History::new());
    }
}
