//! Win and draw evaluation for tic-tac-toe boards.
//!
//! Evaluation is pure: the board alone determines the outcome, and nothing
//! here is cached across moves.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::{Win, winning_line};

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived outcome of a board. Never stored; recomputed on observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A player completed a triple.
    Won(Win),
    /// Board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(win) => Some(win.player()),
            _ => None,
        }
    }

    /// Returns the winning triple if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Won(win) => Some(win.line()),
            _ => None,
        }
    }

    /// Returns true if the game has ended (won or drawn).
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates the outcome of a board.
#[instrument(level = "debug")]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(win) = winning_line(board) {
        Outcome::Won(win)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_won_board_reports_winner_and_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::Center, Square::Occupied(Player::O));
        board.set(Position::BottomRight, Square::Occupied(Player::O));

        let result = outcome(&board);
        assert_eq!(result.winner(), Some(Player::O));
        assert_eq!(
            result.line(),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
        assert!(result.is_over());
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(outcome(&board), Outcome::Draw);
    }
}
