//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Nothing here holds state: the session asks for
//! the outcome of the board at its cursor every time it needs one.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{GameStatus, status};
pub use win::{LINES, Line, winner, winning_line};
