//! Turn/board state machine for tic-tac-toe.

use crate::position::Position;
use crate::rules::{Outcome, outcome};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game: the board plus whose turn it is.
///
/// Everything else (outcome, status text, disabled flags) is derived from
/// these two fields on observation. Terminal states are never stored: the
/// board is re-evaluated after every move, and the turn never advances past
/// a terminal board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Applies the current player's mark at the given position.
    ///
    /// Intents on an occupied square, or after the game has ended, are
    /// dropped without effect. This is the UI-guard contract: the rendering
    /// layer forwards every click and re-reads derived state afterwards,
    /// so an invalid intent is not an error to surface.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) {
        if self.outcome().is_over() {
            debug!(%pos, "move after game end ignored");
            return;
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "move on occupied square ignored");
            return;
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        debug!(board = %self.board, "move applied");
    }

    /// Resets to the initial state: empty board, X to move.
    ///
    /// Always succeeds, regardless of the current state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Self::new();
    }

    /// Evaluates the current outcome of the board.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns the winning triple, if the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome().line()
    }

    /// Status line for display.
    ///
    /// `"Winner: <mark>"` once a triple is complete, `"Draw"` on a full
    /// board without one, `"Next: <mark>"` otherwise.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Won(win) => format!("Winner: {}", win.player()),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next: {}", self.to_move),
        }
    }

    /// Whether a cell should reject input: occupied, or game over.
    pub fn is_cell_disabled(&self, pos: Position) -> bool {
        !self.board.is_empty(pos) || self.outcome().is_over()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
