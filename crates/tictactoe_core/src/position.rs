//! Board cells, identified by their labels 1 through 9.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine cells on the board.
///
/// Cells are labelled row-major from 1 to 9:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
///
/// The label is an identifier, not an index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Cell 1.
    TopLeft,
    /// Cell 2.
    TopCenter,
    /// Cell 3.
    TopRight,
    /// Cell 4.
    MiddleLeft,
    /// Cell 5.
    Center,
    /// Cell 6.
    MiddleRight,
    /// Cell 7.
    BottomLeft,
    /// Cell 8.
    BottomCenter,
    /// Cell 9.
    BottomRight,
}

impl Position {
    /// All 9 positions, in label order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Returns the cell label (1-9).
    pub fn id(self) -> u8 {
        match self {
            Position::TopLeft => 1,
            Position::TopCenter => 2,
            Position::TopRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::BottomLeft => 7,
            Position::BottomCenter => 8,
            Position::BottomRight => 9,
        }
    }

    /// Looks up a cell by label, returning `None` outside 1-9.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Position::TopLeft),
            2 => Some(Position::TopCenter),
            3 => Some(Position::TopRight),
            4 => Some(Position::MiddleLeft),
            5 => Some(Position::Center),
            6 => Some(Position::MiddleRight),
            7 => Some(Position::BottomLeft),
            8 => Some(Position::BottomCenter),
            9 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Human-readable name of the cell.
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Zero-based row (0-2).
    pub fn row(self) -> u8 {
        (self.id() - 1) / 3
    }

    /// Zero-based column (0-2).
    pub fn column(self) -> u8 {
        (self.id() - 1) % 3
    }

    /// Parses a cell from its label ("5") or its name ("center").
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, MoveError> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return u8::try_from(id)
                .ok()
                .and_then(Self::from_id)
                .ok_or(MoveError::InvalidPosition(id));
        }

        let wanted = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.name().to_lowercase() == wanted)
            .ok_or_else(|| MoveError::UnknownPosition(s.to_string()))
    }
}

impl TryFrom<u8> for Position {
    type Error = MoveError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(MoveError::InvalidPosition(i64::from(id)))
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.id()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
