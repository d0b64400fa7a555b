//! Uniform random play.

use crate::core::GameRng;
use crate::rules::Board;

use super::{require_moves, Strategy, StrategyKind};

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl<B: Board> Strategy<B> for RandomStrategy {
    fn choose_move(&mut self, state: &B) -> B::Move {
        let moves = state.legal_moves();
        require_moves(&moves, StrategyKind::Random);
        moves[self.rng.gen_range_usize(0..moves.len())]
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }
}
