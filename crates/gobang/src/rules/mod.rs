//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage and turn handling.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, LINE_LENGTH, judge};
