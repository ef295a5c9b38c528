//! Square board storage with bounds-checked access.

use super::position::Position;
use super::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used when no size is given.
pub const DEFAULT_SIZE: usize = 15;

/// Largest side length a board may have.
pub const MAX_SIZE: usize = 1024;

/// Error constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Requested side length was zero.
    #[display("Board size must be greater than zero")]
    ZeroSize,

    /// Requested side length is above [`MAX_SIZE`].
    #[display("Board size {} exceeds the maximum of {}", _0, MAX_SIZE)]
    TooLarge(usize),

    /// Serialized cells do not fill an N×N grid.
    #[display("Expected {expected} cells, found {found}")]
    CellCount {
        /// size × size.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
}

impl std::error::Error for BoardError {}

/// N×N five-in-a-row board.
///
/// Out-of-range reads return `None` and out-of-range writes are ignored,
/// so neighbor probes near the edge need no special casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }
        if size > MAX_SIZE {
            return Err(BoardError::TooLarge(size));
        }
        Ok(Self::empty(size))
    }

    /// Caller guarantees `0 < size <= MAX_SIZE`.
    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrites the cell at `(row, col)`. Off-board writes are ignored.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// True if `(row, col)` is on the board and holds no stone.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Empties every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// All cells in row-major order, paired with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            // size <= MAX_SIZE, checked in `new`
            let pos = Position::new((i / size) as i32, (i % size) as i32);
            (pos, *cell)
        })
    }

    /// Number of occupied cells.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions that still accept a stone.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }
}

/// Unchecked serialized form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.size)?;
        if raw.cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                expected: board.cells.len(),
                found: raw.cells.len(),
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(stone) => stone.symbol(),
                })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
