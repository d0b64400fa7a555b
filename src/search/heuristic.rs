//! Static position evaluation.
//!
//! Scores a position from one player's point of view by summing over every
//! winning line of the board:
//!
//! | line contents                   | score                 |
//! |---------------------------------|-----------------------|
//! | both players present            | 0                     |
//! | own marks only, one short       | `+near_win`           |
//! | own marks only, `k` marks       | `+k`                  |
//! | opponent marks only, one short  | `-near_win`           |
//! | opponent marks only, `k` marks  | `-k`                  |
//!
//! plus `±positional_weight` for every positional cell held by either
//! side. Finished games score `±win` or 0, which dominates every
//! unfinished position as long as `win` exceeds [`Heuristic::bound`].

use serde::{Deserialize, Serialize};

use crate::core::{LineTally, Player, Result, SimError};
use crate::games::{ConnectFour, TicTacToe};
use crate::rules::{Board, GameResult};

/// Evaluator constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Score of a won game (negated for a lost one).
    pub win: i32,

    /// Score of an open line one mark short of completion.
    pub near_win: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            win: 1000,
            near_win: 10,
        }
    }
}

impl HeuristicWeights {
    /// Reject weights under which some unfinished position on either board
    /// could match or outscore a won game.
    pub fn validate(&self) -> Result<()> {
        if self.win <= 0 || self.near_win < 0 {
            return Err(SimError::InvalidConfig(format!(
                "heuristic weights must be positive (win {}, near_win {})",
                self.win, self.near_win
            )));
        }

        let heuristic = Heuristic::new(*self);
        let bound = heuristic
            .bound(&TicTacToe::new())
            .max(heuristic.bound(&ConnectFour::new()));
        if self.win <= bound {
            return Err(SimError::InvalidConfig(format!(
                "win score {} must exceed {bound}, the largest unfinished-position score",
                self.win
            )));
        }
        Ok(())
    }
}

/// Line-counting evaluator shared by the search and the greedy strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heuristic {
    weights: HeuristicWeights,
}

impl Heuristic {
    #[must_use]
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Score `state` for `player`. Higher is better for `player`.
    #[must_use]
    pub fn evaluate<B: Board>(&self, state: &B, player: Player) -> i32 {
        match state.outcome() {
            Some(GameResult::Winner(winner)) if winner == player => self.weights.win,
            Some(GameResult::Winner(_)) => -self.weights.win,
            Some(GameResult::Draw) => 0,
            None => self.line_score(state, player) + self.positional_score(state, player),
        }
    }

    /// Sum of [`Heuristic::score_line`] over every winning line.
    #[must_use]
    pub fn line_score<B: Board>(&self, state: &B, player: Player) -> i32 {
        let grid = state.grid();
        let len = state.line_length();
        state
            .lines()
            .iter()
            .map(|line| self.score_line(grid.tally(line, player), len))
            .sum()
    }

    /// Contribution of one line of `len` cells.
    #[must_use]
    pub fn score_line(&self, tally: LineTally, len: usize) -> i32 {
        match (tally.own, tally.other) {
            (0, 0) => 0,
            (own, 0) => self.open_line(own, len),
            (0, other) => -self.open_line(other, len),
            _ => 0,
        }
    }

    fn open_line(&self, marks: usize, len: usize) -> i32 {
        if marks >= len {
            self.weights.win
        } else if marks + 1 == len {
            self.weights.near_win
        } else {
            marks as i32
        }
    }

    /// Positional cells held by `player` minus those held by the opponent,
    /// times the board's positional weight.
    #[must_use]
    pub fn positional_score<B: Board>(&self, state: &B, player: Player) -> i32 {
        let grid = state.grid();
        let weight = state.positional_weight();
        state
            .positional_cells()
            .iter()
            .map(|&at| match grid.get(at) {
                Some(p) if p == player => weight,
                Some(_) => -weight,
                None => 0,
            })
            .sum()
    }

    /// Largest magnitude an unfinished position of this board can score.
    #[must_use]
    pub fn bound<B: Board>(&self, state: &B) -> i32 {
        let per_line = self.weights.near_win.max(state.line_length() as i32);
        let lines = state.lines().len() as i32;
        let positional = state.positional_cells().len() as i32 * state.positional_weight();
        lines.saturating_mul(per_line).saturating_add(positional)
    }
}
