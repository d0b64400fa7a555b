//! # boardgame-sim
//!
//! Two-player grid games (Tic-Tac-Toe, Connect Four) played between
//! pluggable automated strategies, with a depth-bounded alpha-beta search
//! as the strongest of them.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic Search**: the search and the evaluator are written
//!    once against the `Board` trait and never branch on the variant.
//!
//! 2. **Value-Type Boards**: a board is a small inline value; the search
//!    clones it at every node and never mutates the caller's copy.
//!
//! 3. **Injected Randomness**: every random choice draws from a seeded
//!    `GameRng` owned by whoever needs it, so a match replays from its seed.
//!
//! ## Modules
//!
//! - `core`: players, grid, RNG, errors
//! - `rules`: the `Board` trait and `GameResult`
//! - `games`: Tic-Tac-Toe, Connect Four, runtime variant selection
//! - `search`: heuristic evaluator and alpha-beta search
//! - `strategy`: the `Strategy` trait and the built-in strategies
//! - `arena`: game driver and match runner
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod arena;
pub mod core;
pub mod games;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{ByPlayer, Coord, GameRng, Grid, MoveError, Player, Result, SimError};

pub use crate::rules::{Board, GameResult};

pub use crate::games::{create_board, AnyBoard, AnyMove, Column, ConnectFour, GameVariant, TicTacToe};

pub use crate::search::{AlphaBetaSearch, Heuristic, HeuristicWeights, SearchConfig, SearchStats};

pub use crate::strategy::{SeatSpec, Strategy, StrategyKind};

pub use crate::arena::{play_game, run_match, GameRecord, MatchConfig};
