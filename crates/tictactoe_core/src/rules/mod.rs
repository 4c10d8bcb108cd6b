//! Game rules for tic-tac-toe.
//!
//! Pure functions over a move slice. Nothing here stores state, so the
//! same moves always evaluate to the same status.

pub mod tie;
pub mod win;

pub use tie::{is_full, is_tie};
pub use win::{Claims, LINES, check_winner, winning_line};

use super::{GameStatus, Move, Outcome};
use tracing::{debug, instrument};

/// Computes the status of a round from its moves.
///
/// The round is complete when a player has captured a winning line, or
/// when all nine cells are claimed. A full board without a winning line is
/// a tie. The caller must already guarantee that no position repeats.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn evaluate(moves: &[Move]) -> GameStatus {
    let status = match check_winner(moves) {
        Some(winner) => GameStatus::Complete(Outcome::Winner(winner)),
        None if is_full(moves) => GameStatus::Complete(Outcome::Tie),
        None => GameStatus::InProgress,
    };
    debug!(%status, "Evaluated game status");
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn alternate(ids: &[u8]) -> Vec<Move> {
        ids.iter()
            .enumerate()
            .map(|(i, &id)| {
                let player = if i % 2 == 0 { Player::One } else { Player::Two };
                Move::new(Position::try_from(id).unwrap(), player)
            })
            .collect()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&[]), GameStatus::InProgress);
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(evaluate(&alternate(&[5, 1, 9, 3])), GameStatus::InProgress);
    }

    #[test]
    fn test_early_win_completes_round() {
        assert_eq!(
            evaluate(&alternate(&[1, 4, 2, 5, 3])),
            GameStatus::Complete(Outcome::Winner(Player::One))
        );
    }

    #[test]
    fn test_win_on_last_cell_is_not_tie() {
        assert_eq!(
            evaluate(&alternate(&[1, 2, 4, 5, 3, 6, 8, 9, 7])),
            GameStatus::Complete(Outcome::Winner(Player::One))
        );
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        assert_eq!(
            evaluate(&alternate(&[1, 2, 3, 5, 4, 6, 8, 7, 9])),
            GameStatus::Complete(Outcome::Tie)
        );
    }
}
