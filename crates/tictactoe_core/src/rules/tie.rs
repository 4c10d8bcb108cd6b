//! Tie detection for tic-tac-toe.

use super::super::{Move, MoveSequence};
use super::win::check_winner;
use tracing::instrument;

/// Checks if every cell has been claimed.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn is_full(moves: &[Move]) -> bool {
    moves.len() >= MoveSequence::CAPACITY
}

/// A full board with no winning line is a tie.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn is_tie(moves: &[Move]) -> bool {
    is_full(moves) && check_winner(moves).is_none()
}
