//! Move-choosing strategies.
//!
//! The driver holds two `Box<dyn Strategy<B>>` and never knows which kind
//! sits in which seat:
//!
//! - **Minimax**: [`AlphaBetaSearch`] with a configurable depth
//! - **Random**: uniform over the legal moves
//! - **Greedy**: best evaluator score one ply ahead
//! - **Buffered**: uniform random fed from a pre-filled byte pool
//!
//! Human players are recognised as a tag so configurations naming them fail
//! with a clear error rather than an "unknown strategy" one.

pub mod buffered;
pub mod greedy;
pub mod random;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Player, Result, SimError};
use crate::rules::Board;
use crate::search::{AlphaBetaSearch, SearchConfig, DEFAULT_DEPTH};

pub use buffered::{BufferedRandomStrategy, EntropyPool, DEFAULT_POOL_SIZE};
pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;

/// Something that picks a move for the side to play.
///
/// ## Implementation Notes
///
/// - `choose_move` takes `&mut self` for the strategy's own RNG; the board
///   itself is read-only.
/// - Calling `choose_move` on a position with no legal moves is a caller
///   bug and panics.
pub trait Strategy<B: Board> {
    /// Pick one of `state.legal_moves()`.
    fn choose_move(&mut self, state: &B) -> B::Move;

    /// Which kind of strategy this is.
    fn kind(&self) -> StrategyKind;

    /// Look-ahead in plies, for strategies that have one.
    fn depth(&self) -> Option<u32> {
        None
    }

    /// Short label such as `minimax(3)` or `random`.
    fn label(&self) -> String {
        match self.depth() {
            Some(depth) => format!("{}({depth})", self.kind()),
            None => self.kind().to_string(),
        }
    }
}

impl<B: Board> Strategy<B> for AlphaBetaSearch {
    fn choose_move(&mut self, state: &B) -> B::Move {
        AlphaBetaSearch::choose_move(self, state)
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Minimax
    }

    fn depth(&self) -> Option<u32> {
        Some(self.config().depth)
    }
}

/// Strategy tags accepted in configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Minimax,
    Random,
    Greedy,
    Buffered,
    Human,
}

impl StrategyKind {
    /// Canonical tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Buffered => "buffered",
            StrategyKind::Human => "human",
        }
    }

    /// Whether the seat's depth setting is meaningful for this kind.
    #[must_use]
    pub const fn uses_depth(self) -> bool {
        matches!(self, StrategyKind::Minimax | StrategyKind::Greedy)
    }
}

impl FromStr for StrategyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(StrategyKind::Minimax),
            "random" | "r" => Ok(StrategyKind::Random),
            "greedy" | "astar" | "a" => Ok(StrategyKind::Greedy),
            "buffered" | "quantum" | "q" => Ok(StrategyKind::Buffered),
            "human" | "h" => Ok(StrategyKind::Human),
            _ => Err(SimError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One seat of a match: which strategy, and how deep it looks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    pub kind: StrategyKind,
    pub depth: u32,
}

impl Default for SeatSpec {
    fn default() -> Self {
        Self::new(StrategyKind::Minimax)
    }
}

impl SeatSpec {
    /// Seat with the default depth.
    #[must_use]
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            kind,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create a new seat with custom depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Depth as recorded in results: `None` for kinds that ignore it.
    #[must_use]
    pub fn recorded_depth(&self) -> Option<u32> {
        self.kind.uses_depth().then_some(self.depth)
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind == StrategyKind::Human {
            return Err(SimError::UnsupportedStrategy(self.kind.to_string()));
        }
        if self.kind.uses_depth() && self.depth == 0 {
            return Err(SimError::InvalidDepth(self.depth));
        }
        Ok(())
    }

    /// Instantiate the strategy for `player`, drawing all of its randomness
    /// from `rng`.
    pub fn build<B: Board>(
        &self,
        player: Player,
        mut rng: GameRng,
    ) -> Result<Box<dyn Strategy<B>>> {
        self.validate()?;
        let strategy: Box<dyn Strategy<B>> = match self.kind {
            StrategyKind::Minimax => {
                let config = SearchConfig::default()
                    .with_depth(self.depth)
                    .with_seed(rng.seed());
                Box::new(AlphaBetaSearch::new(player, config)?.with_rng(rng))
            }
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::Greedy => {
                Box::new(GreedyStrategy::new(player, rng).with_depth(self.depth))
            }
            StrategyKind::Buffered => {
                let pool = EntropyPool::new(rng.fork());
                Box::new(BufferedRandomStrategy::new(pool, rng))
            }
            StrategyKind::Human => {
                return Err(SimError::UnsupportedStrategy(self.kind.to_string()))
            }
        };
        Ok(strategy)
    }
}

impl fmt::Display for SeatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.recorded_depth() {
            Some(depth) => write!(f, "{}({depth})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Panic unless `moves` has something to choose from.
pub(crate) fn require_moves<M>(moves: &[M], who: StrategyKind) {
    assert!(
        !moves.is_empty(),
        "{who} strategy asked for a move in a position with no legal moves"
    );
}
