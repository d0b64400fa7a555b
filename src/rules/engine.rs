//! The `Board` trait every game variant implements.
//!
//! The search engine, the heuristic evaluator and the driver are written
//! once against this trait and never branch on which game they hold:
//! - Legal moves in natural enumeration order
//! - Atomic move application with terminal detection
//! - The winning-line geometry the evaluator scores

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Grid, Line, MoveError, Player};
use crate::games::GameVariant;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Board filled with no completed line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// A two-player game position.
///
/// ## Implementation Notes
///
/// - `Clone` must produce a fully independent position: the search clones at
///   every node and explores branches without touching the original.
/// - `legal_moves` is empty exactly when the game is over.
/// - `apply` either fails without mutating anything or places the mark,
///   recomputes the outcome and passes the turn, all in one call.
pub trait Board: Clone + fmt::Debug + fmt::Display {
    /// Move type for this variant.
    type Move: Copy + Eq + Hash + fmt::Debug + fmt::Display;

    /// Which game this is.
    fn variant(&self) -> GameVariant;

    /// Read-only view of the cells.
    fn grid(&self) -> &Grid;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Legal moves in natural order: ascending row then column, or ascending
    /// column for gravity boards.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move for the current player.
    fn apply(&mut self, mv: Self::Move) -> Result<(), MoveError>;

    /// `Some(result)` once the game has ended.
    fn outcome(&self) -> Option<GameResult>;

    /// Number of equal marks in a row needed to win.
    fn line_length(&self) -> usize;

    /// Every winning line on this board.
    fn lines(&self) -> &[Line];

    /// Cells whose occupancy earns a positional bonus.
    fn positional_cells(&self) -> &[Coord];

    /// Bonus per positional cell held (penalty per cell the opponent holds).
    fn positional_weight(&self) -> i32;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// The winning player, if any.
    fn winner(&self) -> Option<Player> {
        self.outcome().and_then(|r| r.winner())
    }

    /// Number of marks placed so far.
    fn ply(&self) -> usize {
        self.grid().occupied()
    }
}

/// Outcome implied by the marks on `grid`.
///
/// A completed line wins; otherwise a full grid is a draw.
#[must_use]
pub fn resolve_outcome(grid: &Grid, lines: &[Line]) -> Option<GameResult> {
    if let Some(player) = grid.winner(lines) {
        Some(GameResult::Winner(player))
    } else if grid.is_full() {
        Some(GameResult::Draw)
    } else {
        None
    }
}
