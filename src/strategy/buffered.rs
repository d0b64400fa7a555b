//! Random play fed from a batched entropy pool.
//!
//! The pool models an expensive randomness source that is cheap per byte
//! only when drawn in bulk: it refills a fixed-size buffer in one call and
//! hands the bytes out one at a time. Positions with two or fewer moves
//! skip the pool and use the plain RNG.

use crate::core::GameRng;
use crate::rules::Board;

use super::{require_moves, Strategy, StrategyKind};

/// Bytes fetched per refill.
pub const DEFAULT_POOL_SIZE: usize = 1000;

/// Fixed-size byte buffer refilled in batches from a source RNG.
#[derive(Clone, Debug)]
pub struct EntropyPool {
    source: GameRng,
    buffer: Vec<u8>,
    cursor: usize,
    refills: u64,
}

impl EntropyPool {
    /// Pool of [`DEFAULT_POOL_SIZE`] bytes.
    #[must_use]
    pub fn new(source: GameRng) -> Self {
        Self::with_size(source, DEFAULT_POOL_SIZE)
    }

    /// Pool of `size` bytes. Starts empty; the first draw fills it.
    #[must_use]
    pub fn with_size(source: GameRng, size: usize) -> Self {
        assert!(size > 0, "entropy pool needs at least one byte");
        Self {
            source,
            buffer: vec![0; size],
            cursor: size,
            refills: 0,
        }
    }

    /// Next byte, refilling the whole buffer when it runs dry.
    pub fn next_byte(&mut self) -> u8 {
        if self.cursor >= self.buffer.len() {
            self.refill();
        }
        let byte = self.buffer[self.cursor];
        self.cursor += 1;
        byte
    }

    /// Bytes left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Number of batch refills so far.
    #[must_use]
    pub fn refills(&self) -> u64 {
        self.refills
    }

    fn refill(&mut self) {
        self.source.fill_bytes(&mut self.buffer);
        self.cursor = 0;
        self.refills += 1;
        log::trace!("entropy pool refilled ({} bytes)", self.buffer.len());
    }
}

/// Uniform-ish random play: `byte % move_count` from the pool.
#[derive(Clone, Debug)]
pub struct BufferedRandomStrategy {
    pool: EntropyPool,
    rng: GameRng,
}

impl BufferedRandomStrategy {
    /// `rng` serves positions with two or fewer moves.
    #[must_use]
    pub fn new(pool: EntropyPool, rng: GameRng) -> Self {
        Self { pool, rng }
    }

    #[must_use]
    pub fn pool(&self) -> &EntropyPool {
        &self.pool
    }
}

impl<B: Board> Strategy<B> for BufferedRandomStrategy {
    fn choose_move(&mut self, state: &B) -> B::Move {
        let moves = state.legal_moves();
        require_moves(&moves, StrategyKind::Buffered);

        let index = if moves.len() <= 2 {
            self.rng.gen_range_usize(0..moves.len())
        } else {
            usize::from(self.pool.next_byte()) % moves.len()
        };
        moves[index]
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Buffered
    }
}
