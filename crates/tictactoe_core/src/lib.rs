//! Pure two-player tic-tac-toe rules.
//!
//! # Architecture
//!
//! - **Sequence**: the chronological [`MoveSequence`] of one round
//! - **Rules**: [`evaluate`] turns a move slice into a [`GameStatus`]
//! - **Turn**: whose turn it is, derived from the sequence tail
//! - **Submission**: the gate that appends moves ([`submit_move`], [`reset_round`])
//! - **Session**: [`GameSession`], the owned state a front end drives
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, GameStatus, Outcome, Player, Position};
//!
//! let mut session = GameSession::new();
//! for id in [1u8, 4, 2, 5, 3] {
//!     session.submit_move(Position::try_from(id)?);
//! }
//! assert_eq!(
//!     session.status(),
//!     GameStatus::Complete(Outcome::Winner(Player::One))
//! );
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod position;
mod sequence;
mod session;
mod submission;
mod types;

pub mod invariants;
pub mod rules;
pub mod turn;

pub use action::{Move, MoveError};
pub use contracts::{Contract, LegalMove, PlayersTurn, PositionIsFree, SubmissionContract};
pub use position::Position;
pub use rules::evaluate;
pub use sequence::MoveSequence;
pub use session::{GameSession, IgnoreReason, Submission, Tally};
pub use submission::{reset_round, submit_move};
pub use types::{GameStatus, Outcome, Player};
