//! Moves and the errors raised while building or validating them.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A recorded claim of a position by a player.
///
/// Moves are immutable once created. The order they appear in a
/// [`MoveSequence`](crate::MoveSequence) is the order they were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }

    /// Returns the claimed position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.name())
    }
}

/// Error raised when a move or position cannot be accepted.
///
/// Submitting an occupied cell during play is not an error; the
/// submission gate ignores it. These variants cover untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The label is outside 1-9.
    #[display("Position {} is outside 1-9", _0)]
    InvalidPosition(i64),

    /// The text names no cell.
    #[display("Unknown position {:?}", _0)]
    UnknownPosition(String),

    /// The position was already claimed earlier in the sequence.
    #[display("Position {} is already occupied", _0)]
    PositionOccupied(Position),

    /// The move was made out of turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A sequence invariant was violated.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
