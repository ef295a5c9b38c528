//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A `(row, col)` pair identifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position `steps` cells away along `(d_row, d_col)`.
    pub fn offset(self, (d_row, d_col): (i32, i32), steps: i32) -> Self {
        Self::new(self.row + d_row * steps, self.col + d_col * steps)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
