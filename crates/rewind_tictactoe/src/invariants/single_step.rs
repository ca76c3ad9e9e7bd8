//! Single-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{History, Snapshot};

/// Invariant: adjacent snapshots differ in exactly one square.
///
/// That square goes from empty to a mark, no other square changes, and
/// the later snapshot records it as its move.
pub struct SingleStepInvariant;

impl SingleStepInvariant {
    fn is_step(before: &Snapshot, after: &Snapshot) -> bool {
        let changed: Vec<usize> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(index, _)| index)
            .collect();

        match (changed.as_slice(), after.placed()) {
            ([index], Some(pos)) => {
                *index == pos.to_index()
                    && before.board().is_empty(pos)
                    && !after.board().is_empty(pos)
            }
            _ => false,
        }
    }
}

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .all(|pair| Self::is_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its recorded move"
    }
}
