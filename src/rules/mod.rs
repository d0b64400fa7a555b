//! Game rules abstraction.
//!
//! Variants implement `Board` to define:
//! - Legal moves for a position
//! - How a move changes the position
//! - Win/draw conditions and the winning-line geometry
//!
//! The search and the driver call into `Board` but never interpret
//! variant-specific concepts directly.

pub mod engine;

pub use engine::{resolve_outcome, Board, GameResult};
