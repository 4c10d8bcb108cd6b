//! Tests for board position labels.

use tictactoe_core::{GameSession, MoveError, Position};

#[test]
fn test_position_ids() {
    assert_eq!(Position::TopLeft.id(), 1);
    assert_eq!(Position::Center.id(), 5);
    assert_eq!(Position::BottomRight.id(), 9);
}

#[test]
fn test_position_from_id() {
    assert_eq!(Position::from_id(1), Some(Position::TopLeft));
    assert_eq!(Position::from_id(5), Some(Position::Center));
    assert_eq!(Position::from_id(9), Some(Position::BottomRight));
    assert_eq!(Position::from_id(0), None);
    assert_eq!(Position::from_id(10), None);
}

#[test]
fn test_invalid_label_error_message() {
    let err = Position::try_from(12).unwrap_err();
    assert_eq!(err, MoveError::InvalidPosition(12));
    assert!(err.to_string().contains("outside 1-9"));
}

#[test]
fn test_free_positions_empty_board() {
    let session = GameSession::new();
    assert_eq!(session.moves().free_positions().len(), 9);
}

#[test]
fn test_free_positions_filters_occupied() {
    let mut session = GameSession::new();
    session.submit_move(Position::TopLeft);
    session.submit_move(Position::Center);

    let free = session.moves().free_positions();
    assert_eq!(free.len(), 7);
    assert!(!free.contains(&Position::TopLeft));
    assert!(!free.contains(&Position::Center));
    assert!(free.contains(&Position::BottomRight));
}
