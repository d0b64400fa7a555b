//! Adversarial search for boardgame-sim.
//!
//! ## Overview
//!
//! - **Minimax with alpha-beta pruning**: depth-bounded, written once
//!   against [`Board`](crate::rules::Board) and shared by both variants
//! - **Line-counting heuristic**: scores cutoff positions; also used by the
//!   one-ply greedy strategy
//! - **Random tie-break**: equally-scored root moves are chosen uniformly
//!   through an owned, seedable RNG
//! - **Diagnostics**: per-decision node, leaf and cutoff counts
//!
//! ## Usage
//!
//! ```rust
//! use boardgame_sim::core::Player;
//! use boardgame_sim::games::ConnectFour;
//! use boardgame_sim::search::{AlphaBetaSearch, SearchConfig};
//!
//! // Three A marks stacked in column 0, A to move
//! let board = ConnectFour::from_columns(&[0, 6, 0, 6, 0, 5]).unwrap();
//!
//! let mut search = AlphaBetaSearch::new(Player::A, SearchConfig::default()).unwrap();
//! let mv = search.choose_move(&board);
//! assert_eq!(mv.0, 0);
//! println!("searched {} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod heuristic;
pub mod minimax;
pub mod stats;

// Re-export main types
pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use heuristic::{Heuristic, HeuristicWeights};
pub use minimax::{AlphaBetaSearch, RootAnalysis};
pub(crate) use minimax::child_after;
pub use stats::SearchStats;
