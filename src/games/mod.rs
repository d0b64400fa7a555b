//! Game variants.
//!
//! - `tictactoe`: 3x3, three in a row
//! - `connect_four`: 6x7 with gravity, four in a row
//!
//! Code that knows the variant at compile time uses the concrete boards.
//! Code that picks the variant at runtime (from a tag string) uses
//! [`create_board`], which returns an [`AnyBoard`]: a tagged union that is
//! itself a `Board`, so the search runs on it unchanged.

pub mod connect_four;
pub mod tictactoe;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Grid, Line, MoveError, Player, SimError};
use crate::rules::{Board, GameResult};

pub use connect_four::{Column, ConnectFour};
pub use tictactoe::TicTacToe;

/// The supported games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameVariant {
    TicTacToe,
    ConnectFour,
}

impl GameVariant {
    /// Canonical tag, as accepted by `FromStr`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            GameVariant::TicTacToe => "tictactoe",
            GameVariant::ConnectFour => "connectfour",
        }
    }

    /// Short alias.
    #[must_use]
    pub const fn short_tag(self) -> &'static str {
        match self {
            GameVariant::TicTacToe => "ttt",
            GameVariant::ConnectFour => "c4",
        }
    }
}

impl FromStr for GameVariant {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tictactoe" | "ttt" => Ok(GameVariant::TicTacToe),
            "connectfour" | "c4" => Ok(GameVariant::ConnectFour),
            _ => Err(SimError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Empty board for a runtime-selected variant.
///
/// ```
/// use boardgame_sim::games::{create_board, GameVariant};
/// use boardgame_sim::rules::Board;
///
/// let board = create_board("c4".parse::<GameVariant>().unwrap());
/// assert_eq!(board.legal_moves().len(), 7);
/// ```
#[must_use]
pub fn create_board(variant: GameVariant) -> AnyBoard {
    match variant {
        GameVariant::TicTacToe => AnyBoard::TicTacToe(TicTacToe::new()),
        GameVariant::ConnectFour => AnyBoard::ConnectFour(ConnectFour::new()),
    }
}

/// Either board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyBoard {
    TicTacToe(TicTacToe),
    ConnectFour(ConnectFour),
}

/// A move for an [`AnyBoard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyMove {
    Cell(Coord),
    Column(Column),
}

impl fmt::Display for AnyMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyMove::Cell(at) => write!(f, "{at}"),
            AnyMove::Column(col) => write!(f, "{col}"),
        }
    }
}

impl From<Coord> for AnyMove {
    fn from(at: Coord) -> Self {
        AnyMove::Cell(at)
    }
}

impl From<Column> for AnyMove {
    fn from(col: Column) -> Self {
        AnyMove::Column(col)
    }
}

impl Board for AnyBoard {
    type Move = AnyMove;

    fn variant(&self) -> GameVariant {
        match self {
            AnyBoard::TicTacToe(b) => b.variant(),
            AnyBoard::ConnectFour(b) => b.variant(),
        }
    }

    fn grid(&self) -> &Grid {
        match self {
            AnyBoard::TicTacToe(b) => b.grid(),
            AnyBoard::ConnectFour(b) => b.grid(),
        }
    }

    fn current_player(&self) -> Player {
        match self {
            AnyBoard::TicTacToe(b) => b.current_player(),
            AnyBoard::ConnectFour(b) => b.current_player(),
        }
    }

    fn legal_moves(&self) -> Vec<AnyMove> {
        match self {
            AnyBoard::TicTacToe(b) => b.legal_moves().into_iter().map(AnyMove::Cell).collect(),
            AnyBoard::ConnectFour(b) => {
                b.legal_moves().into_iter().map(AnyMove::Column).collect()
            }
        }
    }

    fn apply(&mut self, mv: AnyMove) -> Result<(), MoveError> {
        match (self, mv) {
            (AnyBoard::TicTacToe(b), AnyMove::Cell(at)) => b.apply(at),
            (AnyBoard::ConnectFour(b), AnyMove::Column(col)) => b.apply(col),
            _ => Err(MoveError::WrongVariant),
        }
    }

    fn outcome(&self) -> Option<GameResult> {
        match self {
            AnyBoard::TicTacToe(b) => b.outcome(),
            AnyBoard::ConnectFour(b) => b.outcome(),
        }
    }

    fn line_length(&self) -> usize {
        match self {
            AnyBoard::TicTacToe(b) => b.line_length(),
            AnyBoard::ConnectFour(b) => b.line_length(),
        }
    }

    fn lines(&self) -> &[Line] {
        match self {
            AnyBoard::TicTacToe(b) => b.lines(),
            AnyBoard::ConnectFour(b) => b.lines(),
        }
    }

    fn positional_cells(&self) -> &[Coord] {
        match self {
            AnyBoard::TicTacToe(b) => b.positional_cells(),
            AnyBoard::ConnectFour(b) => b.positional_cells(),
        }
    }

    fn positional_weight(&self) -> i32 {
        match self {
            AnyBoard::TicTacToe(b) => b.positional_weight(),
            AnyBoard::ConnectFour(b) => b.positional_weight(),
        }
    }
}

impl fmt::Display for AnyBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyBoard::TicTacToe(b) => write!(f, "{b}"),
            AnyBoard::ConnectFour(b) => write!(f, "{b}"),
        }
    }
}
