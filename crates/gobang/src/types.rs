//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};

/// Stone color; also the player whose turn it is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Stone {
    /// Black (moves first by default).
    Black,
    /// White.
    White,
}

impl Stone {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No stone.
    #[default]
    Empty,
    /// Cell holds a stone.
    Occupied(Stone),
}

impl Cell {
    /// Numeric code used by hosts: Empty=0, Black=1, White=2.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(Stone::Black) => 1,
            Cell::Occupied(Stone::White) => 2,
        }
    }

    /// Returns the stone in this cell, if any.
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(stone) => Some(stone),
        }
    }

    /// True when no stone is present.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A numeric cell code outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invalid cell code {}", _0)]
pub struct InvalidCellCode(pub u8);

impl std::error::Error for InvalidCellCode {}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellCode;

    /// Inverse of [`Cell::code`].
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Occupied(Stone::Black)),
            2 => Ok(Cell::Occupied(Stone::White)),
            _ => Err(InvalidCellCode(code)),
        }
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        Cell::Occupied(stone)
    }
}

/// Result of judging a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No five-in-a-row yet and the board still has room.
    #[default]
    Undecided,
    /// One color holds at least one five-in-a-row.
    Won(Stone),
    /// Board is full with no five-in-a-row.
    Draw,
    /// Both colors hold a five-in-a-row; unreachable through legal play.
    Invalid,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Won(stone) => Some(*stone),
            _ => None,
        }
    }

    /// True for every outcome except [`Outcome::Undecided`].
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::Undecided)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Won(stone) => write!(f, "{} wins", stone),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Invalid => write!(f, "Invalid board"),
        }
    }
}
