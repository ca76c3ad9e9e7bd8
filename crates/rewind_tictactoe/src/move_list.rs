//! Jump-to list entries for presenting history.

use crate::{Coordinates, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

/// Describes a move for display: "game start", or "(row, column)".
pub fn describe(placed: Option<Position>) -> String {
    match placed {
        None => "game start".to_string(),
        Some(pos) => pos.coordinates().to_string(),
    }
}

/// One row of the jump-to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// The move that produced the snapshot, `None` at game start.
    placed: Option<Position>,
    /// Whether the cursor is on this entry.
    is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(index: usize, placed: Option<Position>, is_current: bool) -> Self {
        Self {
            index,
            placed,
            is_current,
        }
    }

    /// One-based coordinates of the move, `None` at game start.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.placed.map(Position::coordinates)
    }

    /// "game start" or "(row, column)".
    pub fn description(&self) -> String {
        describe(self.placed)
    }

    /// Text for the jump-to list.
    ///
    /// The current entry reads "You are at ...", the others "Go to ...".
    pub fn label(&self) -> String {
        let target = match self.coordinates() {
            None => "game start".to_string(),
            Some(coords) => format!("move #{} {}", self.index, coords),
        };
        if self.is_current {
            format!("You are at {}", target)
        } else {
            format!("Go to {}", target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(None), "game start");
        assert_eq!(describe(Some(Position::Center)), "(2, 2)");
        assert_eq!(describe(Some(Position::TopRight)), "(1, 3)");
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveEntry::new(0, None, false).label(), "Go to game start");
        assert_eq!(MoveEntry::new(0, None, true).label(), "You are at game start");
        assert_eq!(
            MoveEntry::new(3, Some(Position::BottomLeft), false).label(),
            "Go to move #3 (3, 1)"
        );
        assert_eq!(
            MoveEntry::new(3, Some(Position::BottomLeft), true).label(),
            "You are at move #3 (3, 1)"
        );
    }

    #[test]
    fn test_order_toggle() {
        assert_eq!(MoveOrder::default(), MoveOrder::Ascending);
        assert_eq!(MoveOrder::Ascending.toggle(), MoveOrder::Descending);
        assert_eq!(MoveOrder::Descending.toggle(), MoveOrder::Ascending);
    }
}
