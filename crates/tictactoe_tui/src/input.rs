//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Claim a cell directly by its label.
    Submit(Position),
    /// Claim the cell under the cursor.
    SubmitCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Show or hide the menu panel.
    ToggleMenu,
    /// Clear the board, keep the tally.
    ResetRound,
    /// Clear the board and the tally.
    NewRound,
    /// Dismiss the result popup and play another round.
    PlayAgain,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action.
///
/// While the result popup is showing only "play again" and quit are
/// accepted, the way a modal covers the board.
pub fn action_for(key: KeyCode, modal_open: bool) -> Option<Action> {
    if modal_open {
        return match key {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::PlayAgain),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        KeyCode::Char('r') => Some(Action::ResetRound),
        KeyCode::Char('n') => Some(Action::NewRound),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitCursor),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Position::from_id)
            .map(Action::Submit),
        _ => None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_id(row * 3 + col + 1).unwrap_or(cursor)
}
