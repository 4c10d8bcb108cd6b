//! Alternating turn invariant: players alternate 1, 2, 1, 2, ...

use super::super::{MoveSequence, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The move at an even index belongs to player 1 and the move at an odd
/// index to player 2.
pub struct AlternatingTurnInvariant;

impl Invariant<MoveSequence> for AlternatingTurnInvariant {
    fn holds(sequence: &MoveSequence) -> bool {
        sequence.iter().enumerate().all(|(i, m)| {
            let expected = if i % 2 == 0 { Player::One } else { Player::Two };
            m.player() == expected
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position, submit_move};

    #[test]
    fn test_empty_sequence_holds() {
        assert!(AlternatingTurnInvariant::holds(&MoveSequence::new()));
    }

    #[test]
    fn test_submitted_sequence_holds() {
        let mut sequence = MoveSequence::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            sequence = submit_move(sequence, pos).0;
        }
        assert!(AlternatingTurnInvariant::holds(&sequence));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut sequence = MoveSequence::new();
        sequence.push(Move::new(Position::TopLeft, Player::One));
        sequence.push(Move::new(Position::Center, Player::One));
        assert!(!AlternatingTurnInvariant::holds(&sequence));
    }

    #[test]
    fn test_player_two_opening_violates() {
        let mut sequence = MoveSequence::new();
        sequence.push(Move::new(Position::TopLeft, Player::Two));
        assert!(!AlternatingTurnInvariant::holds(&sequence));
    }
}
