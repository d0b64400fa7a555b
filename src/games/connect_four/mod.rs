//! Connect Four: four in a row on a 6x7 grid with gravity.
//!
//! Moves are column indices; a mark lands on the lowest empty row of its
//! column. Every cell of the center column carries the positional bonus.

mod game;

pub use game::{Column, ConnectFour, COLS, ROWS, RUN};
