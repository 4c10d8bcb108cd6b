//! The chronological record of moves in one round.

use super::contracts::LegalMove;
use super::{Move, MoveError, Player, Position};
use serde::Serialize;
use tracing::instrument;

/// Ordered moves of the current round, oldest first.
///
/// No two moves share a position, players alternate starting with
/// [`Player::One`], and the length never exceeds nine. The only way to
/// append is [`submit_move`](crate::submit_move), which upholds all three.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    /// Number of cells on the board, and so the longest possible sequence.
    pub const CAPACITY: usize = 9;

    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            moves: Vec::with_capacity(Self::CAPACITY),
        }
    }

    /// Builds a sequence from untrusted moves, checking each against the
    /// ones before it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PositionOccupied`] for a repeated position and
    /// [`MoveError::WrongPlayer`] when players do not alternate.
    #[instrument(skip(moves))]
    pub fn try_from_moves(moves: impl IntoIterator<Item = Move>) -> Result<Self, MoveError> {
        let mut sequence = Self::new();
        for action in moves {
            LegalMove::check(&action, &sequence)?;
            sequence.moves.push(action);
        }
        Ok(sequence)
    }

    /// Returns the moves as a slice.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of moves played.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true once every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.moves.len() >= Self::CAPACITY
    }

    /// Returns the most recent move.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Returns the player holding `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<Player> {
        self.moves
            .iter()
            .find(|m| m.position() == position)
            .map(|m| m.player())
    }

    /// Returns true if some move already claims `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupant(position).is_some()
    }

    /// Positions nobody has claimed yet, in label order.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| !self.is_occupied(*pos))
            .collect()
    }

    /// Appends without checking. Callers must have run the precondition.
    pub(crate) fn push(&mut self, action: Move) {
        self.moves.push(action);
    }

    /// Iterates the moves oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl AsRef<[Move]> for MoveSequence {
    fn as_ref(&self) -> &[Move] {
        &self.moves
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
