//! Draw detection logic for five-in-a-row.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell holds a stone.
///
/// A full board with no winner is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.stone_count() == board.size() * board.size()
}
