//! Playing games and matches between strategies.
//!
//! - `config`: `MatchConfig`, seats and the first-player policy
//! - `record`: per-game results in seat terms
//! - `runner`: the turn loop (`play_game`) and the match loop (`run_match`)
//!
//! ```rust
//! use boardgame_sim::arena::{run_match, FirstPlayer, MatchConfig};
//! use boardgame_sim::games::GameVariant;
//! use boardgame_sim::strategy::{SeatSpec, StrategyKind};
//!
//! let config = MatchConfig::new(GameVariant::ConnectFour)
//!     .with_seats(
//!         SeatSpec::new(StrategyKind::Minimax).with_depth(2),
//!         SeatSpec::new(StrategyKind::Random),
//!     )
//!     .with_first_player(FirstPlayer::Random)
//!     .with_games(2);
//!
//! let records = run_match(&config).unwrap();
//! assert_eq!(records.len(), 2);
//! ```

pub mod config;
pub mod record;
pub mod runner;

pub use config::{FirstPlayer, MatchConfig, Seat};
pub use record::{GameOutcome, GameRecord, SeatRecord};
pub use runner::{play_game, run_match, PlayedGame};
