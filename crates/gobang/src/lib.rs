//! Gobang - five-in-a-row rules engine
//!
//! Board state, turn management, move legality and win/draw judging for
//! embedding in a host that owns presentation and input.
//!
//! # Example
//!
//! ```
//! use gobang::{Gameplay, Outcome, Stone};
//!
//! let mut game = Gameplay::new(Stone::Black);
//! for col in 0..4 {
//!     game.make_move(0, col)?; // black
//!     game.make_move(1, col)?; // white
//! }
//! game.make_move(0, 4)?;
//! assert_eq!(game.judge().outcome(), &Outcome::Won(Stone::Black));
//! # Ok::<(), gobang::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod gameplay;
mod judgement;
mod position;
pub mod rules;
mod types;

pub use board::{Board, BoardError, DEFAULT_SIZE, MAX_SIZE};
pub use config::{ConfigError, GameConfig};
pub use error::MoveError;
pub use gameplay::Gameplay;
pub use judgement::{Judgement, JudgementError};
pub use position::Position;
pub use types::{Cell, InvalidCellCode, Outcome, Stone};
