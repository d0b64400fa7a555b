//! One-ply heuristic play.
//!
//! Scores the position after each legal move with the same evaluator the
//! search uses at its leaves and plays a best one. No look-ahead beyond
//! that single ply, so it takes immediate wins but walks into forks.

use crate::core::{GameRng, Player};
use crate::rules::Board;
use crate::search::{child_after, Heuristic, HeuristicWeights, DEFAULT_DEPTH};

use super::{require_moves, Strategy, StrategyKind};

/// Best immediate evaluator score, random among ties.
#[derive(Clone, Debug)]
pub struct GreedyStrategy {
    player: Player,
    heuristic: Heuristic,
    rng: GameRng,
    depth: u32,
}

impl GreedyStrategy {
    #[must_use]
    pub fn new(player: Player, rng: GameRng) -> Self {
        Self {
            player,
            heuristic: Heuristic::default(),
            rng,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Record a nominal depth for reporting; play is always one ply.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.heuristic = Heuristic::new(weights);
        self
    }

    /// Every legal move reaching the best immediate score.
    pub fn best_moves<B: Board>(&self, state: &B) -> Vec<B::Move> {
        let mut best = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in state.legal_moves() {
            let child = child_after(state, mv);
            let score = self.heuristic.evaluate(&child, self.player);
            if score > best {
                best = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best {
                best_moves.push(mv);
            }
        }
        best_moves
    }
}

impl<B: Board> Strategy<B> for GreedyStrategy {
    fn choose_move(&mut self, state: &B) -> B::Move {
        let best_moves = self.best_moves(state);
        require_moves(&best_moves, StrategyKind::Greedy);
        best_moves[self.rng.gen_range_usize(0..best_moves.len())]
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Greedy
    }

    fn depth(&self) -> Option<u32> {
        Some(self.depth)
    }
}
