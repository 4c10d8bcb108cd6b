//! A local two-player game session.

use super::{GameStatus, Move, MoveSequence, Outcome, Player, Position, rules, submission, turn};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Why a submission was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// The cell already holds a move.
    Occupied,
    /// The round is over and waits for a reset.
    RoundOver,
}

/// Result of [`GameSession::submit_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Submission {
    /// The move was recorded.
    Placed {
        /// The move that was appended.
        placed: Move,
        /// Status after the move.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored {
        /// Why the submission had no effect.
        reason: IgnoreReason,
        /// The unchanged status.
        status: GameStatus,
    },
}

impl Submission {
    /// Status of the round after the submission.
    pub fn status(&self) -> GameStatus {
        match self {
            Submission::Placed { status, .. } | Submission::Ignored { status, .. } => *status,
        }
    }

    /// Returns true if a move was recorded.
    pub fn is_placed(&self) -> bool {
        matches!(self, Submission::Placed { .. })
    }
}

/// Completed rounds since the session started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    player_one_wins: u32,
    player_two_wins: u32,
    ties: u32,
}

impl Tally {
    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one_wins,
            Player::Two => self.player_two_wins,
        }
    }

    /// Rounds that ended in a tie.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Total completed rounds.
    pub fn rounds(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::One) => self.player_one_wins += 1,
            Outcome::Winner(Player::Two) => self.player_two_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

/// The live game: the current round's moves plus the running tally.
///
/// The session is the single owner of the move sequence. Front ends hold
/// a `GameSession` and call into it once per user action.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    moves: MoveSequence,
    tally: Tally,
}

impl GameSession {
    /// Creates a session with an empty board and a zeroed tally.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self::default()
    }

    /// Moves played so far this round.
    pub fn moves(&self) -> &MoveSequence {
        &self.moves
    }

    /// Running tally of completed rounds.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Status of the current round.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.moves.moves())
    }

    /// Player who makes the next move.
    pub fn current_player(&self) -> Player {
        turn::current_player(self.moves.moves())
    }

    /// Player who moves after [`current_player`](Self::current_player).
    pub fn next_player(&self) -> Player {
        turn::next_player(self.moves.moves())
    }

    /// Player holding `position`, if any.
    pub fn occupant(&self, position: Position) -> Option<Player> {
        self.moves.occupant(position)
    }

    /// Claims `position` for the current player.
    ///
    /// Ignored when the cell is taken or the round is already complete.
    /// A submission that completes the round adds its outcome to the tally.
    #[instrument(skip(self), fields(played = self.moves.len()))]
    pub fn submit_move(&mut self, position: Position) -> Submission {
        let status = self.status();
        if status.is_complete() {
            debug!(%status, "Round over, ignoring submission");
            return Submission::Ignored {
                reason: IgnoreReason::RoundOver,
                status,
            };
        }

        let played = self.moves.len();
        let (moves, status) = submission::submit_move(std::mem::take(&mut self.moves), position);
        self.moves = moves;

        match self.moves.last().copied().filter(|_| self.moves.len() > played) {
            Some(placed) => {
                if let GameStatus::Complete(outcome) = status {
                    info!(%outcome, "Round complete");
                    self.tally.record(outcome);
                }
                Submission::Placed { placed, status }
            }
            None => Submission::Ignored {
                reason: IgnoreReason::Occupied,
                status,
            },
        }
    }

    /// Clears the board for another round, keeping the tally.
    #[instrument(skip(self), fields(played = self.moves.len()))]
    pub fn reset_round(&mut self) {
        self.moves = submission::reset_round();
    }

    /// Clears the board and the tally.
    #[instrument(skip(self), fields(rounds = self.tally.rounds()))]
    pub fn new_round(&mut self) {
        info!("Starting over with a fresh tally");
        self.moves = submission::reset_round();
        self.tally = Tally::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GameSession, ids: &[u8]) -> Vec<Submission> {
        ids.iter()
            .map(|&id| session.submit_move(Position::try_from(id).unwrap()))
            .collect()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = GameSession::new();
        assert!(session.moves().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.next_player(), Player::Two);
        assert_eq!(session.tally().rounds(), 0);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = GameSession::new();
        let results = play(&mut session, &[1, 1]);

        assert!(results[0].is_placed());
        assert_eq!(
            results[1],
            Submission::Ignored {
                reason: IgnoreReason::Occupied,
                status: GameStatus::InProgress,
            }
        );
        assert_eq!(session.moves().len(), 1);
        assert_eq!(session.current_player(), Player::Two);
    }

    #[test]
    fn test_win_records_tally_once() {
        let mut session = GameSession::new();
        let results = play(&mut session, &[1, 4, 2, 5, 3]);

        let last = results.last().copied().unwrap();
        assert_eq!(
            last.status(),
            GameStatus::Complete(Outcome::Winner(Player::One))
        );
        assert_eq!(session.tally().wins(Player::One), 1);

        // Board is frozen until reset.
        let ignored = session.submit_move(Position::BottomRight);
        assert_eq!(
            ignored,
            Submission::Ignored {
                reason: IgnoreReason::RoundOver,
                status: GameStatus::Complete(Outcome::Winner(Player::One)),
            }
        );
        assert_eq!(session.moves().len(), 5);
        assert_eq!(session.tally().rounds(), 1);
    }

    #[test]
    fn test_reset_round_keeps_tally() {
        let mut session = GameSession::new();
        play(&mut session, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        assert_eq!(session.tally().ties(), 1);

        session.reset_round();
        assert!(session.moves().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.tally().ties(), 1);
    }

    #[test]
    fn test_new_round_clears_tally() {
        let mut session = GameSession::new();
        play(&mut session, &[4, 1, 5, 2, 9, 3]);
        assert_eq!(session.tally().wins(Player::Two), 1);

        session.new_round();
        assert!(session.moves().is_empty());
        assert_eq!(*session.tally(), Tally::default());
    }

    #[test]
    fn test_reset_mid_round_records_nothing() {
        let mut session = GameSession::new();
        play(&mut session, &[5, 1]);
        session.reset_round();
        assert_eq!(session.tally().rounds(), 0);
        assert_eq!(session.occupant(Position::Center), None);
    }
}
