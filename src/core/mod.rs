//! Core types: players, grids, RNG, errors.
//!
//! These building blocks know nothing about any particular game; the
//! variants in `games` are assembled from them.

pub mod error;
pub mod grid;
pub mod player;
pub mod rng;

pub use error::{MoveError, Result, SimError};
pub use grid::{enumerate_lines, Cell, Coord, Grid, Line, LineTally};
pub use player::{ByPlayer, Player};
pub use rng::GameRng;
