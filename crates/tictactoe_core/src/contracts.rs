//! Contract-based validation for move submissions.
//!
//! A contract pairs a precondition on the state before an action with a
//! postcondition relating the states before and after it.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SequenceInvariants};
use super::sequence::MoveSequence;
use super::turn;
use tracing::instrument;

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: nobody has claimed the move's position yet.
pub struct PositionIsFree;

impl PositionIsFree {
    /// Fails with [`MoveError::PositionOccupied`] if the cell is taken.
    #[instrument(skip(sequence))]
    pub fn check(action: &Move, sequence: &MoveSequence) -> Result<(), MoveError> {
        if sequence.is_occupied(action.position()) {
            Err(MoveError::PositionOccupied(action.position()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move belongs to the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] if the move is out of turn.
    #[instrument(skip(sequence))]
    pub fn check(action: &Move, sequence: &MoveSequence) -> Result<(), MoveError> {
        if action.player() != turn::current_player(sequence.moves()) {
            Err(MoveError::WrongPlayer(action.player()))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the position is free and it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(sequence))]
    pub fn check(action: &Move, sequence: &MoveSequence) -> Result<(), MoveError> {
        PositionIsFree::check(action, sequence)?;
        PlayersTurn::check(action, sequence)?;
        Ok(())
    }
}

/// Contract for appending one move to a sequence.
///
/// Preconditions:
/// - Position is free
/// - Move belongs to the current player
///
/// Postconditions:
/// - Exactly one move was appended and earlier moves are untouched
/// - Every [`SequenceInvariants`] member still holds
pub struct SubmissionContract;

impl Contract<MoveSequence, Move> for SubmissionContract {
    fn pre(sequence: &MoveSequence, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, sequence)
    }

    fn post(before: &MoveSequence, after: &MoveSequence) -> Result<(), MoveError> {
        let appended_one = after.len() == before.len() + 1
            && after.moves().starts_with(before.moves());
        if !appended_one {
            return Err(MoveError::InvariantViolation(
                "Submission must append exactly one move".to_string(),
            ));
        }

        SequenceInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
