//! Connect Four board.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::{enumerate_lines, Coord, Grid, Line, MoveError, Player};
use crate::games::GameVariant;
use crate::rules::{resolve_outcome, Board, GameResult};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const RUN: usize = 4;

/// A move: the column to drop a mark into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Column(pub usize);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

fn lines() -> &'static [Line] {
    static LINES: OnceLock<Vec<Line>> = OnceLock::new();
    LINES.get_or_init(|| enumerate_lines(ROWS, COLS, RUN))
}

fn center_column() -> &'static [Coord] {
    static CELLS: OnceLock<Vec<Coord>> = OnceLock::new();
    CELLS.get_or_init(|| (0..ROWS).map(|row| Coord::new(row, COLS / 2)).collect())
}

/// 6 rows x 7 columns with gravity: marks fill each column bottom-up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFour {
    grid: Grid,
    to_move: Player,
    outcome: Option<GameResult>,
}

impl ConnectFour {
    /// Empty board, `Player::A` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(ROWS, COLS),
            to_move: Player::A,
            outcome: None,
        }
    }

    /// Build a position by dropping into `columns` in turn from the empty
    /// board.
    pub fn from_columns(columns: &[usize]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for &col in columns {
            board.apply(Column(col))?;
        }
        Ok(board)
    }

    /// Number of marks already in `col`.
    #[must_use]
    pub fn height(&self, col: usize) -> usize {
        match self.grid.lowest_empty_row(col) {
            Some(row) => ROWS - 1 - row,
            None => ROWS,
        }
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for ConnectFour {
    type Move = Column;

    fn variant(&self) -> GameVariant {
        GameVariant::ConnectFour
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<Column> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| self.grid.get(Coord::new(0, col)).is_none())
            .map(Column)
            .collect()
    }

    fn apply(&mut self, Column(col): Column) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            return Err(MoveError::OutOfBounds {
                row: 0,
                col,
                rows: ROWS,
                cols: COLS,
            });
        }
        let row = self
            .grid
            .lowest_empty_row(col)
            .ok_or(MoveError::ColumnFull(col))?;

        self.grid.place(Coord::new(row, col), self.to_move);
        self.outcome = resolve_outcome(&self.grid, lines());
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    fn line_length(&self) -> usize {
        RUN
    }

    fn lines(&self) -> &[Line] {
        lines()
    }

    fn positional_cells(&self) -> &[Coord] {
        center_column()
    }

    fn positional_weight(&self) -> i32 {
        2
    }
}

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        let labels: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        write!(f, "  {}", labels.join("   "))
    }
}
