//! Win detection for tic-tac-toe.

use super::super::{Move, Player, Position};
use tracing::{instrument, warn};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// The set of positions one player has claimed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Claims(u16);

impl Claims {
    /// Collects the positions `player` holds in `moves`.
    pub fn of(player: Player, moves: &[Move]) -> Self {
        moves
            .iter()
            .filter(|m| m.player() == player)
            .map(|m| m.position())
            .collect()
    }

    /// Returns true if `position` is in the set.
    pub fn contains(self, position: Position) -> bool {
        self.0 & Self::bit(position) != 0
    }

    /// Returns true if every position of `line` is in the set.
    pub fn covers(self, line: &[Position; 3]) -> bool {
        line.iter().all(|pos| self.contains(*pos))
    }

    /// Number of claimed positions.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if nothing is claimed.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn bit(position: Position) -> u16 {
        1 << (position.id() - 1)
    }
}

impl FromIterator<Position> for Claims {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |acc, pos| acc | Self::bit(pos)))
    }
}

/// Returns the first winning line covered by `claims`, if any.
pub fn winning_line(claims: Claims) -> Option<[Position; 3]> {
    LINES.iter().copied().find(|line| claims.covers(line))
}

/// Checks whether either player has captured a winning line.
///
/// Both players winning at once cannot happen through the submission
/// gate. If it is ever seen, it is logged and the owner of the later line
/// in [`LINES`] order is reported; callers must not rely on which.
#[instrument(skip(moves), fields(played = moves.len()))]
pub fn check_winner(moves: &[Move]) -> Option<Player> {
    let one = Claims::of(Player::One, moves);
    let two = Claims::of(Player::Two, moves);

    let mut winner = None;
    let mut winners_seen = (false, false);
    for line in &LINES {
        if one.covers(line) {
            winner = Some(Player::One);
            winners_seen.0 = true;
        }
        if two.covers(line) {
            winner = Some(Player::Two);
            winners_seen.1 = true;
        }
    }

    if winners_seen == (true, true) {
        warn!(?winner, "Both players hold a winning line");
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(cells: &[(u8, Player)]) -> Vec<Move> {
        cells
            .iter()
            .map(|&(id, player)| Move::new(Position::try_from(id).unwrap(), player))
            .collect()
    }

    #[test]
    fn test_no_winner_without_moves() {
        assert_eq!(check_winner(&[]), None);
    }

    #[test]
    fn test_winner_top_row() {
        let played = moves(&[
            (1, Player::One),
            (4, Player::Two),
            (2, Player::One),
            (5, Player::Two),
            (3, Player::One),
        ]);
        assert_eq!(check_winner(&played), Some(Player::One));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let played = moves(&[
            (1, Player::One),
            (3, Player::Two),
            (2, Player::One),
            (5, Player::Two),
            (9, Player::One),
            (7, Player::Two),
        ]);
        assert_eq!(check_winner(&played), Some(Player::Two));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let played = moves(&[(1, Player::One), (5, Player::Two), (2, Player::One)]);
        assert_eq!(check_winner(&played), None);
    }

    #[test]
    fn test_every_line_wins_for_its_owner() {
        for line in LINES {
            let played: Vec<Move> = line.iter().map(|p| Move::new(*p, Player::Two)).collect();
            assert_eq!(check_winner(&played), Some(Player::Two), "line {:?}", line);
        }
    }

    #[test]
    fn test_double_winner_still_completes() {
        // Unreachable through the gate. Which player is reported is not a
        // contract, only that evaluation completes without panicking.
        let played = moves(&[
            (1, Player::One),
            (4, Player::Two),
            (2, Player::One),
            (5, Player::Two),
            (3, Player::One),
            (6, Player::Two),
        ]);

        assert!(check_winner(&played).is_some());
        assert!(matches!(
            crate::evaluate(&played),
            crate::GameStatus::Complete(crate::Outcome::Winner(_))
        ));
    }

    #[test]
    fn test_claims_partition_by_player() {
        let played = moves(&[(1, Player::One), (5, Player::Two), (9, Player::One)]);
        let one = Claims::of(Player::One, &played);
        let two = Claims::of(Player::Two, &played);

        assert_eq!(one.len(), 2);
        assert!(one.contains(Position::TopLeft));
        assert!(one.contains(Position::BottomRight));
        assert!(!one.contains(Position::Center));
        assert_eq!(two.len(), 1);
        assert!(two.contains(Position::Center));
        assert_eq!(winning_line(one), None);
    }

    #[test]
    fn test_winning_line_reports_captured_line() {
        let claims: Claims = [Position::TopRight, Position::Center, Position::BottomLeft]
            .into_iter()
            .collect();
        assert_eq!(
            winning_line(claims),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }
}
