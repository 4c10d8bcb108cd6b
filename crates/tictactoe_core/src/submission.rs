//! The submission gate: the only path that appends to a move sequence.

use super::contracts::{Contract, SubmissionContract};
use super::{GameStatus, Move, MoveSequence, Position, rules, turn};
use tracing::{debug, instrument};

/// Claims `position` for the player whose turn it is.
///
/// If the position is already taken the call is a no-op: the sequence comes
/// back unchanged together with its current status. Otherwise a move for
/// [`turn::current_player`] is appended and the new status is evaluated.
#[instrument(skip(sequence), fields(played = sequence.len()))]
pub fn submit_move(mut sequence: MoveSequence, position: Position) -> (MoveSequence, GameStatus) {
    let action = Move::new(position, turn::current_player(sequence.moves()));

    if let Err(err) = SubmissionContract::pre(&sequence, &action) {
        debug!(%err, "Ignoring submission");
        let status = rules::evaluate(sequence.moves());
        return (sequence, status);
    }

    #[cfg(debug_assertions)]
    let before = sequence.clone();

    sequence.push(action);
    debug!(%action, "Move recorded");

    #[cfg(debug_assertions)]
    {
        if let Err(err) = SubmissionContract::post(&before, &sequence) {
            panic!("Submission broke the move sequence: {}", err);
        }
    }

    let status = rules::evaluate(sequence.moves());
    (sequence, status)
}

/// Starts a fresh round.
#[instrument]
pub fn reset_round() -> MoveSequence {
    debug!("Round reset");
    MoveSequence::new()
}
