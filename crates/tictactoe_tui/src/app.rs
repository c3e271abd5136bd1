//! Application state and key handling.

use crate::input;
use crossterm::event::KeyCode;
use tictactoe_core::{Game, Position};
use tracing::debug;

/// Main application state: the game plus the board cursor.
///
/// Status text, disabled cells, and the winning line are not held here;
/// the UI derives them from the game on every frame.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Handles a key press: one synchronous state transition per event.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('r') => {
                debug!("reset requested");
                self.game.reset();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits 1-9 address cells directly; '0' has no cell.
                if let Some(pos) = c
                    .to_digit(10)
                    .filter(|d| (1..=9).contains(d))
                    .and_then(|d| Position::from_index(d as usize - 1))
                {
                    debug!(%pos, "digit move");
                    self.game.apply_move(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                debug!(cursor = %self.cursor, "cursor move");
                self.game.apply_move(self.cursor);
            }
            code => {
                self.cursor = input::step(self.cursor, code);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Player, Square};

    #[test]
    fn test_digit_key_places_mark() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.game().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.game().to_move(), Player::O);
    }

    #[test]
    fn test_zero_key_does_nothing() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('0'));
        assert!(Position::ALL.iter().all(|&p| app.game().board().is_empty(p)));
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(Position::TopCenter),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_occupied_cell_click_is_noop() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('1')); // X
        app.handle_key(KeyCode::Char('1')); // dropped
        assert_eq!(
            app.game().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.game().to_move(), Player::O);
    }

    #[test]
    fn test_reset_key_restores_game() {
        let mut app = App::new();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key)); // X wins the top row
        }
        assert!(app.game().outcome().is_over());

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(*app.game(), Game::new());
        assert_eq!(app.game().status_text(), "Next: X");
    }
}
