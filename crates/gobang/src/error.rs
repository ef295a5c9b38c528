//! Errors raised when a move is rejected.

use super::position::Position;
use super::types::Outcome;

/// Reason a move was rejected. A rejected move changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board has already been judged decided.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),

    /// Coordinates fall outside `0..size`.
    #[display("Move ({row}, {col}) is off the board: indices must be in 0..{size}")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
        /// Board side length.
        size: usize,
    },

    /// The target cell already holds a stone.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}
