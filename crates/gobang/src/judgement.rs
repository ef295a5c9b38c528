//! Outcome of judging a board, with the stones that decided it.

use super::position::Position;
use super::types::{Outcome, Stone};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A judged outcome plus every position on a winning line.
///
/// `winning_positions` keeps insertion order and holds no duplicates. It is
/// non-empty only when the outcome is [`Outcome::Won`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawJudgement")]
pub struct Judgement {
    /// The judged outcome.
    outcome: Outcome,
    /// Positions of all winning lines found.
    winning_positions: Vec<Position>,
}

impl Judgement {
    /// Creates an undecided judgement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position unless it is already recorded.
    pub fn add_position(&mut self, row: i32, col: i32) {
        let pos = Position::new(row, col);
        if !self.winning_positions.contains(&pos) {
            self.winning_positions.push(pos);
        }
    }

    /// Back to undecided with no positions.
    pub fn reset(&mut self) {
        self.outcome = Outcome::Undecided;
        self.winning_positions.clear();
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Stone> {
        self.outcome.winner()
    }

    /// True once the game can accept no further moves.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_decided()
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

/// Serialized judgement whose positions contradict its outcome.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JudgementError {
    /// Positions were given for an outcome other than a win.
    #[display("{} winning positions given for outcome {}", count, outcome)]
    PositionsWithoutWinner {
        /// The outcome supplied.
        outcome: Outcome,
        /// Number of positions supplied.
        count: usize,
    },

    /// A win was given with no positions.
    #[display("Outcome {} has no winning positions", _0)]
    WinnerWithoutPositions(Outcome),

    /// The same position appears twice.
    #[display("Duplicate winning position {}", _0)]
    DuplicatePosition(Position),
}

impl std::error::Error for JudgementError {}

/// Unchecked serialized form of [`Judgement`].
#[derive(Deserialize)]
struct RawJudgement {
    outcome: Outcome,
    winning_positions: Vec<Position>,
}

impl TryFrom<RawJudgement> for Judgement {
    type Error = JudgementError;

    fn try_from(raw: RawJudgement) -> Result<Self, Self::Error> {
        let count = raw.winning_positions.len();
        match raw.outcome {
            Outcome::Won(_) if count == 0 => {
                return Err(JudgementError::WinnerWithoutPositions(raw.outcome));
            }
            Outcome::Won(_) => {}
            outcome if count > 0 => {
                return Err(JudgementError::PositionsWithoutWinner { outcome, count });
            }
            _ => {}
        }

        let mut judgement = Judgement::new();
        judgement.set_outcome(raw.outcome);
        for pos in raw.winning_positions {
            if judgement.winning_positions.contains(&pos) {
                return Err(JudgementError::DuplicatePosition(pos));
            }
            judgement.winning_positions.push(pos);
        }
        Ok(judgement)
    }
}
