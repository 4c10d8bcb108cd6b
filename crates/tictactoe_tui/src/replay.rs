//! Non-interactive replay of a list of cells.

use crate::config::Settings;
use serde::Serialize;
use tictactoe_core::{GameSession, GameStatus, MoveSequence, Position, Submission};
use tracing::{info, instrument, warn};

/// What a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Moves that were recorded, in order.
    pub moves: MoveSequence,
    /// Status after the last submission.
    pub status: GameStatus,
    /// Submissions that had no effect.
    pub ignored: Vec<Position>,
}

/// Feeds `positions` through a fresh session, one submission each.
#[instrument(skip(positions), fields(count = positions.len()))]
pub fn replay(positions: &[Position]) -> ReplayReport {
    let mut session = GameSession::new();
    let mut ignored = Vec::new();

    for &position in positions {
        if let Submission::Ignored { reason, .. } = session.submit_move(position) {
            warn!(%position, ?reason, "Submission ignored");
            ignored.push(position);
        }
    }

    let status = session.status();
    info!(%status, moves = session.moves().len(), "Replay finished");

    ReplayReport {
        moves: session.moves().clone(),
        status,
        ignored,
    }
}

/// Renders the board as text, empty cells showing their label.
pub fn board_text(moves: &MoveSequence, settings: &Settings) -> String {
    let mut result = String::new();
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        for (col, &pos) in cells.iter().enumerate() {
            match moves.occupant(pos) {
                Some(player) => result.push_str(settings.mark(player)),
                None => result.push_str(&pos.id().to_string()),
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Text output: the board followed by the status line.
pub fn render_text(report: &ReplayReport, settings: &Settings) -> String {
    let mut out = board_text(&report.moves, settings);
    out.push_str("\n\n");
    out.push_str(&report.status.to_string());
    if !report.ignored.is_empty() {
        out.push_str(&format!("\n({} submission(s) ignored)", report.ignored.len()));
    }
    out
}
