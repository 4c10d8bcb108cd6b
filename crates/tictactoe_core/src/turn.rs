//! Turn order, derived from the move history.
//!
//! There is no stored "whose turn" field. The answer is recomputed from the
//! tail of the sequence every time, so it cannot drift from the moves.

use super::{Move, Player};
use tracing::instrument;

/// Returns the player who makes the next move.
///
/// Player 1 opens; after that the turn passes to whoever did not make the
/// last move.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn current_player(moves: &[Move]) -> Player {
    moves
        .last()
        .map_or(Player::One, |last| last.player().opposite())
}

/// Returns the player who moves after [`current_player`].
///
/// Used for "you're up" prompts shown once the current move is recorded.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn next_player(moves: &[Move]) -> Player {
    current_player(moves).opposite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_player_one_opens() {
        assert_eq!(current_player(&[]), Player::One);
        assert_eq!(next_player(&[]), Player::Two);
    }

    #[test]
    fn test_turn_follows_last_mover() {
        let moves = [Move::new(Position::Center, Player::One)];
        assert_eq!(current_player(&moves), Player::Two);
        assert_eq!(next_player(&moves), Player::One);

        let moves = [
            Move::new(Position::Center, Player::One),
            Move::new(Position::TopLeft, Player::Two),
        ];
        assert_eq!(current_player(&moves), Player::One);
    }
}
