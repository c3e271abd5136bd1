//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is a draw.
///
/// A board is a draw iff every square is occupied and no triple is complete.
#[instrument(level = "debug")]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
