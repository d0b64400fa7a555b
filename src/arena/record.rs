//! Per-game results.
//!
//! A record captures who played, who opened, who won and the move list.
//! Aggregating records into statistics or writing them out is left to the
//! caller; the records are plain serde data for that purpose.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::games::GameVariant;
use crate::rules::GameResult;
use crate::strategy::{SeatSpec, StrategyKind};

use super::config::Seat;

/// What sat in one seat during a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub strategy: StrategyKind,

    /// `None` for strategies without a depth setting.
    pub depth: Option<u32>,

    /// Side this seat played.
    pub player: Player,
}

impl SeatRecord {
    #[must_use]
    pub fn new(spec: &SeatSpec, player: Player) -> Self {
        Self {
            strategy: spec.kind,
            depth: spec.recorded_depth(),
            player,
        }
    }
}

/// How a game ended, in seat terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Seat),
    Draw,
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 1-based game number within the match.
    pub game: u32,

    pub variant: GameVariant,

    /// Seat that moved first (and played as `Player::A`).
    pub first: Seat,

    /// Seat 1 then seat 2.
    pub seats: [SeatRecord; 2],

    pub outcome: GameOutcome,

    /// Moves played.
    pub plies: usize,

    /// Moves in play order, as displayed.
    pub moves: Vec<String>,
}

impl GameRecord {
    #[must_use]
    pub fn seat(&self, seat: Seat) -> &SeatRecord {
        &self.seats[seat.index()]
    }

    /// The seat that played `player`.
    #[must_use]
    pub fn seat_of(&self, player: Player) -> Seat {
        if player == Player::A {
            self.first
        } else {
            self.first.other()
        }
    }

    /// Translate a board result into seat terms.
    #[must_use]
    pub fn outcome_for(first: Seat, result: GameResult) -> GameOutcome {
        match result {
            GameResult::Winner(Player::A) => GameOutcome::Winner(first),
            GameResult::Winner(Player::B) => GameOutcome::Winner(first.other()),
            GameResult::Draw => GameOutcome::Draw,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match self.outcome {
            GameOutcome::Winner(seat) => Some(seat),
            GameOutcome::Draw => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.outcome == GameOutcome::Draw
    }

    /// Whether the opening seat won.
    #[must_use]
    pub fn first_mover_won(&self) -> bool {
        self.winner() == Some(self.first)
    }
}
