//! Application state and logic.

use crate::config::Settings;
use crate::input::{self, Action};
use crossterm::event::KeyCode;
use tictactoe_core::{GameSession, IgnoreReason, Outcome, Player, Position, Submission};
use tracing::{debug, info};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the game session and the purely visual state around it. All game
/// decisions go through [`GameSession`].
pub struct App {
    session: GameSession,
    settings: Settings,
    cursor: Position,
    menu_open: bool,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: Settings) -> Self {
        Self {
            session: GameSession::new(),
            settings,
            cursor: Position::Center,
            menu_open: false,
            status_message: "Player 1 starts.".to_string(),
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the menu panel is showing.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The result popup shows whenever the round is complete.
    pub fn modal_open(&self) -> bool {
        self.session.status().is_complete()
    }

    /// Text for the result popup, if the round is over.
    pub fn modal_message(&self) -> Option<String> {
        self.session.status().outcome().map(|outcome| outcome.to_string())
    }

    /// "Player N, you're up!" for whoever moves next.
    pub fn turn_prompt(&self) -> String {
        format!("{}, you're up!", self.session.current_player())
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match input::action_for(key, self.modal_open()) {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    /// Applies an action to the session and the view state.
    pub fn apply(&mut self, action: Action) -> Control {
        debug!(?action, "Applying action");

        match action {
            Action::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Action::Submit(position) => {
                self.cursor = position;
                self.submit(position);
            }
            Action::SubmitCursor => self.submit(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::ToggleMenu => self.menu_open = !self.menu_open,
            Action::ResetRound | Action::PlayAgain => {
                self.session.reset_round();
                self.menu_open = false;
                self.status_message = "New round. Player 1 starts.".to_string();
            }
            Action::NewRound => {
                self.session.new_round();
                self.menu_open = false;
                self.status_message = "Scores cleared. Player 1 starts.".to_string();
            }
        }

        Control::Continue
    }

    fn submit(&mut self, position: Position) {
        let player = self.session.current_player();
        self.status_message = match self.session.submit_move(position) {
            Submission::Placed { status, .. } => match status.outcome() {
                Some(Outcome::Winner(winner)) => format!("{} takes the round.", winner),
                Some(Outcome::Tie) => "Board full.".to_string(),
                None => format!("{} played {}.", player, position.name()),
            },
            Submission::Ignored {
                reason: IgnoreReason::Occupied,
                ..
            } => format!("{} is already taken.", position.name()),
            Submission::Ignored {
                reason: IgnoreReason::RoundOver,
                ..
            } => "The round is over.".to_string(),
        };
    }

    /// Glyph for `player` from the settings.
    pub fn mark(&self, player: Player) -> &str {
        self.settings.mark(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::GameStatus;

    fn press_all(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn test_digit_keys_alternate_players() {
        let mut app = App::new(Settings::default());
        press_all(&mut app, "15");

        assert_eq!(app.session().occupant(Position::TopLeft), Some(Player::One));
        assert_eq!(app.session().occupant(Position::Center), Some(Player::Two));
        assert_eq!(app.turn_prompt(), "Player 1, you're up!");
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_occupied_cell_reports_and_ignores() {
        let mut app = App::new(Settings::default());
        press_all(&mut app, "11");

        assert_eq!(app.session().moves().len(), 1);
        assert_eq!(app.status_message(), "Top-left is already taken.");
        assert_eq!(app.turn_prompt(), "Player 2, you're up!");
    }

    #[test]
    fn test_cursor_submission() {
        let mut app = App::new(Settings::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.session().occupant(Position::TopCenter), Some(Player::One));
    }

    #[test]
    fn test_win_opens_modal_until_play_again() {
        let mut app = App::new(Settings::default());
        press_all(&mut app, "14253");

        assert!(app.modal_open());
        assert_eq!(app.modal_message().as_deref(), Some("Player 1 wins!"));

        // Board keys are swallowed by the popup.
        press_all(&mut app, "9");
        assert_eq!(app.session().moves().len(), 5);

        app.handle_key(KeyCode::Enter);
        assert!(!app.modal_open());
        assert!(app.session().moves().is_empty());
        assert_eq!(app.session().tally().wins(Player::One), 1);
    }

    #[test]
    fn test_tie_message() {
        let mut app = App::new(Settings::default());
        press_all(&mut app, "123546879");

        assert_eq!(app.session().status(), GameStatus::Complete(Outcome::Tie));
        assert_eq!(app.modal_message().as_deref(), Some("It's a tie!"));
    }

    #[test]
    fn test_menu_toggle_and_new_round() {
        let mut app = App::new(Settings::default());
        press_all(&mut app, "14253");
        app.handle_key(KeyCode::Char('p'));
        assert_eq!(app.session().tally().rounds(), 1);

        app.handle_key(KeyCode::Char('m'));
        assert!(app.menu_open());
        app.handle_key(KeyCode::Char('n'));
        assert!(!app.menu_open());
        assert_eq!(app.session().tally().rounds(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Settings::default());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
    }
}
