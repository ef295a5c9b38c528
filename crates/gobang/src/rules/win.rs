//! Win detection logic for five-in-a-row.

use super::super::{Board, Cell, Judgement, Outcome, Position, Stone};
use super::draw::is_full;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Stones in a winning line.
pub const LINE_LENGTH: i32 = 5;

/// Scan directions. Every line is found from its top-most (then left-most)
/// stone, so four forward directions cover all eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Along increasing column.
    Horizontal,
    /// Along increasing row.
    Vertical,
    /// Increasing row, decreasing column.
    AntiDiagonal,
    /// Increasing row, increasing column.
    Diagonal,
}

impl Direction {
    /// `(row, col)` step for one cell in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::AntiDiagonal => (1, -1),
            Direction::Diagonal => (1, 1),
        }
    }
}

/// Counts cells 1..LINE_LENGTH steps from `anchor` that hold `stone`.
/// Off-board steps count nothing.
fn run_from(board: &Board, anchor: Position, stone: Stone, dir: Direction) -> i32 {
    (1..LINE_LENGTH)
        .map(|k| anchor.offset(dir.delta(), k))
        .filter(|p| board.get(p.row, p.col) == Some(Cell::Occupied(stone)))
        .count() as i32
}

/// Judges the board from scratch.
///
/// Returns [`Outcome::Won`] with every winning-line position when exactly one
/// color has five in a row, [`Outcome::Invalid`] (and no positions) when both
/// do, [`Outcome::Draw`] when the board is full without a winner, and
/// [`Outcome::Undecided`] otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn judge(board: &Board) -> Judgement {
    let mut judgement = Judgement::new();
    let mut winner: Option<Stone> = None;

    for (anchor, cell) in board.cells() {
        let Cell::Occupied(stone) = cell else {
            continue;
        };

        let lines: Vec<Direction> = Direction::iter()
            .filter(|dir| run_from(board, anchor, stone, *dir) == LINE_LENGTH - 1)
            .collect();
        if lines.is_empty() {
            continue;
        }

        match winner {
            None => winner = Some(stone),
            Some(w) if w != stone => {
                warn!(%anchor, "Both colors hold five in a row");
                judgement.reset();
                judgement.set_outcome(Outcome::Invalid);
                return judgement;
            }
            Some(_) => {}
        }

        judgement.add_position(anchor.row, anchor.col);
        for dir in lines {
            for k in 1..LINE_LENGTH {
                let pos = anchor.offset(dir.delta(), k);
                judgement.add_position(pos.row, pos.col);
            }
        }
    }

    match winner {
        Some(stone) => judgement.set_outcome(Outcome::Won(stone)),
        None if is_full(board) => judgement.set_outcome(Outcome::Draw),
        None => {}
    }

    debug!(outcome = %judgement.outcome(), "Board judged");
    judgement
}
