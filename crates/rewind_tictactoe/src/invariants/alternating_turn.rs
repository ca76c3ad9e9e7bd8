//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{History, Mark};

/// Invariant: the mark placed to reach snapshot `i` is X for odd `i`
/// and O for even `i`.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, snap)| snap.mark() == Some(Mark::for_turn(index - 1)))
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
