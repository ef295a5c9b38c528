//! Turn-taking state machine for five-in-a-row.
//!
//! The game phase is not stored: it is derived on demand by judging the
//! board, so a [`Gameplay`] is either in progress or decided depending on
//! what [`Gameplay::judge`] reports.

use super::board::{Board, BoardError};
use super::config::GameConfig;
use super::error::MoveError;
use super::judgement::Judgement;
use super::position::Position;
use super::rules;
use super::types::{Cell, Stone};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A game of five-in-a-row: a board plus the color to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gameplay {
    board: Board,
    turn: Stone,
    first: Stone,
}

impl Gameplay {
    /// Starts a game on a fresh 15×15 board.
    #[instrument]
    pub fn new(first: Stone) -> Self {
        Self::with_board(Board::default(), first)
    }

    /// Starts a game on a caller-supplied board, which may already hold stones.
    #[instrument(skip(board), fields(size = board.size()))]
    pub fn with_board(board: Board, first: Stone) -> Self {
        Self {
            board,
            turn: first,
            first,
        }
    }

    /// Starts a game from configuration.
    #[instrument]
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(*config.board_size())?;
        Ok(Self::with_board(board, *config.first_turn()))
    }

    /// Color allowed to place the next stone.
    pub fn turn(&self) -> Stone {
        self.turn
    }

    /// Color that moved first; restored by [`Gameplay::reset`].
    pub fn first_turn(&self) -> Stone {
        self.first
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Releases the board.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Positions that still accept a stone.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Clears the board and hands the turn back to the first color.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = self.first;
    }

    /// Judges the current board. Never fails and has no side effects.
    pub fn judge(&self) -> Judgement {
        rules::judge(&self.board)
    }

    /// Places the current color's stone at `(row, col)` and passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board is already decided
    /// - [`MoveError::OutOfBounds`] if either index is outside `0..size`
    /// - [`MoveError::Occupied`] if the cell holds a stone
    ///
    /// A rejected move leaves board and turn untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        let judgement = self.judge();
        if judgement.is_decided() {
            warn!(outcome = %judgement.outcome(), "Move rejected: game over");
            return Err(MoveError::GameOver(*judgement.outcome()));
        }

        let cell = self.board.get(row, col).ok_or_else(|| {
            warn!("Move rejected: off the board");
            MoveError::OutOfBounds {
                row,
                col,
                size: self.board.size(),
            }
        })?;

        if cell != Cell::Empty {
            warn!("Move rejected: occupied");
            return Err(MoveError::Occupied(Position::new(row, col)));
        }

        self.board.set(row, col, Cell::Occupied(self.turn));
        debug!(stone = %self.turn, "Stone placed");
        self.turn = self.turn.opponent();
        Ok(())
    }
}

impl Default for Gameplay {
    fn default() -> Self {
        Self::new(Stone::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_new_game() {
        let game = Gameplay::default();
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.board().size(), 15);
        assert_eq!(game.valid_moves().len(), 225);
    }

    #[test]
    fn test_first_turn_honored() {
        let mut game = Gameplay::new(Stone::White);
        assert_eq!(game.turn(), Stone::White);
        game.make_move(7, 7).unwrap();
        assert_eq!(game.board().get(7, 7), Some(Cell::Occupied(Stone::White)));
        assert_eq!(game.turn(), Stone::Black);
        game.reset();
        assert_eq!(game.turn(), Stone::White);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Gameplay::default();
        game.make_move(0, 0).unwrap();
        assert_eq!(game.turn(), Stone::White);
        game.make_move(0, 1).unwrap();
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = Gameplay::default();
        game.make_move(0, 0).unwrap();
        assert_eq!(
            game.make_move(0, 0),
            Err(MoveError::Occupied(Position::new(0, 0)))
        );
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(game.board().get(0, 0), Some(Cell::Occupied(Stone::Black)));
    }

    #[test]
    fn test_size_index_rejected() {
        let mut game = Gameplay::default();
        for (row, col) in [(15, 0), (0, 15), (-1, 0), (0, -1)] {
            assert_eq!(
                game.make_move(row, col),
                Err(MoveError::OutOfBounds { row, col, size: 15 })
            );
        }
        assert_eq!(game.turn(), Stone::Black);
        assert_eq!(game.board().stone_count(), 0);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut game = Gameplay::default();
        game.make_move(0, 0).unwrap();
        game.reset();
        assert_eq!(game.board().get(0, 0), Some(Cell::Empty));
        assert_eq!(game.turn(), Stone::Black);
    }

    #[test]
    fn test_from_config() {
        let game = Gameplay::from_config(&GameConfig::new(9, Stone::White)).unwrap();
        assert_eq!(game.board().size(), 9);
        assert_eq!(game.turn(), Stone::White);
        assert_eq!(
            Gameplay::from_config(&GameConfig::default().with_board_size(0)),
            Err(BoardError::ZeroSize)
        );
        assert_eq!(
            Gameplay::from_config(&GameConfig::default().with_board_size(2_000_000_000)),
            Err(BoardError::TooLarge(2_000_000_000))
        );
    }

    #[test]
    fn test_prebuilt_invalid_board_is_over() {
        let mut board = Board::new(15).unwrap();
        for col in 0..5 {
            board.set(0, col, Cell::Occupied(Stone::Black));
            board.set(2, col, Cell::Occupied(Stone::White));
        }
        let mut game = Gameplay::with_board(board, Stone::Black);
        assert_eq!(game.judge().outcome(), &Outcome::Invalid);
        assert_eq!(
            game.make_move(7, 7),
            Err(MoveError::GameOver(Outcome::Invalid))
        );
    }
}
