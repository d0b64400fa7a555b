//! Tic-Tac-Toe: three in a row on a 3x3 grid.
//!
//! Moves are cell coordinates. The center cell carries the positional bonus.

mod game;

pub use game::{TicTacToe, SIZE};
