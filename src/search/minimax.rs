//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The search is generic over [`Board`] and never inspects which game it
//! is playing. Every node works on its own clone of the position, so the
//! caller's board is never touched.

use std::time::Instant;

use crate::core::{GameRng, Player, Result};
use crate::rules::Board;

use super::config::SearchConfig;
use super::heuristic::Heuristic;
use super::stats::SearchStats;

/// Scores of every root move from one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootAnalysis<M> {
    /// Root moves in enumeration order with their scores.
    ///
    /// With pruning enabled only the best scores are exact; the others are
    /// upper bounds strictly below `best_score`.
    pub scores: Vec<(M, i32)>,

    /// Highest root score.
    pub best_score: i32,

    /// Every move scoring `best_score`, in enumeration order.
    pub candidates: Vec<M>,
}

/// Alpha-beta searcher playing one side.
///
/// Owns the tie-break RNG, so two searches built from the same config make
/// identical decisions.
pub struct AlphaBetaSearch {
    /// The side this search maximizes for.
    player: Player,

    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    heuristic: Heuristic,

    /// RNG for tie-breaks.
    rng: GameRng,

    /// Statistics from the last decision.
    stats: SearchStats,
}

impl AlphaBetaSearch {
    /// Create a search for `player`, seeding the tie-break RNG from
    /// `config.seed`.
    pub fn new(player: Player, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            player,
            heuristic: Heuristic::new(config.weights),
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
        })
    }

    /// Use a caller-supplied tie-break stream instead of `config.seed`.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Score every root move of `state`.
    ///
    /// # Panics
    ///
    /// If `state` has no legal moves or it is not this search's turn.
    pub fn analyze<B: Board>(&mut self, state: &B) -> RootAnalysis<B::Move> {
        let start = Instant::now();
        self.stats.reset();

        let moves = state.legal_moves();
        assert!(
            !moves.is_empty(),
            "search asked for a move in a position with no legal moves:\n{state}"
        );
        assert_eq!(
            state.current_player(),
            self.player,
            "search for {} asked to move for the opponent",
            self.player
        );

        let child_depth = self.config.depth - 1;
        let mut alpha = i32::MIN;
        let mut best = i32::MIN;
        let mut scores = Vec::with_capacity(moves.len());

        for mv in moves {
            let child = child_after(state, mv);
            let score = self.alphabeta(&child, child_depth, false, alpha, i32::MAX);
            best = best.max(score);
            if self.config.pruning {
                // One below best keeps later siblings that tie it exact.
                alpha = alpha.max(best.saturating_sub(1));
            }
            scores.push((mv, score));
        }

        let candidates: Vec<B::Move> = scores
            .iter()
            .filter(|(_, score)| *score == best)
            .map(|(mv, _)| *mv)
            .collect();

        self.stats.candidates = candidates.len() as u32;
        self.stats.best_score = best;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        RootAnalysis {
            scores,
            best_score: best,
            candidates,
        }
    }

    /// Pick a best-scoring move, breaking ties uniformly at random.
    ///
    /// # Panics
    ///
    /// If `state` has no legal moves or it is not this search's turn.
    pub fn choose_move<B: Board>(&mut self, state: &B) -> B::Move {
        let analysis = self.analyze(state);
        let mv = match self.rng.choose(&analysis.candidates) {
            Some(mv) => *mv,
            None => unreachable!("root analysis always has a candidate"),
        };

        log::debug!(
            "{} plays {} (score {}, {} tied, {} nodes, {} cutoffs, {}us)",
            self.player,
            mv,
            analysis.best_score,
            analysis.candidates.len(),
            self.stats.nodes,
            self.stats.cutoffs,
            self.stats.time_us
        );
        mv
    }

    fn alphabeta<B: Board>(
        &mut self,
        state: &B,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || state.is_terminal() {
            self.stats.leaf_evaluations += 1;
            return self.heuristic.evaluate(state, self.player);
        }

        let moves = state.legal_moves();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            let child = child_after(state, mv);
            let score = self.alphabeta(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Clone `state` and play `mv`, which came from its own `legal_moves`.
///
/// # Panics
///
/// If the board rejects a move it listed as legal.
pub(crate) fn child_after<B: Board>(state: &B, mv: B::Move) -> B {
    let mut child = state.clone();
    if let Err(err) = child.apply(mv) {
        unreachable!("legal move {mv} rejected: {err}");
    }
    child
}
