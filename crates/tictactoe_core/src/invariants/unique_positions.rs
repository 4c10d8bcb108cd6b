//! Unique positions invariant: each cell is claimed at most once.

use super::super::MoveSequence;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: no two moves share a position.
pub struct UniquePositionsInvariant;

impl Invariant<MoveSequence> for UniquePositionsInvariant {
    fn holds(sequence: &MoveSequence) -> bool {
        let mut seen = HashSet::with_capacity(sequence.len());
        sequence.iter().all(|m| seen.insert(m.position()))
    }

    fn description() -> &'static str {
        "Each position is claimed at most once"
    }
}
