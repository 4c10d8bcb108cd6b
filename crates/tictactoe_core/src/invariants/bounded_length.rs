//! Bounded length invariant: at most one move per cell.

use super::super::MoveSequence;
use super::Invariant;

/// Invariant: a sequence never holds more than nine moves.
pub struct BoundedLengthInvariant;

impl Invariant<MoveSequence> for BoundedLengthInvariant {
    fn holds(sequence: &MoveSequence) -> bool {
        sequence.len() <= MoveSequence::CAPACITY
    }

    fn description() -> &'static str {
        "At most nine moves per round"
    }
}
