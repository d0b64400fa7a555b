//! Rectangular cell grid shared by both game variants.
//!
//! ## Lines
//!
//! A *line* is a run of `k` consecutive cells along a row, a column, or
//! either diagonal. Both win detection and the heuristic evaluator work on
//! the full set of lines of the winning length, enumerated once per board
//! shape by [`enumerate_lines`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::player::Player;

/// Largest board supported (6 x 7).
pub const MAX_CELLS: usize = 42;

/// Contents of one cell: `None` for empty, otherwise the owner.
pub type Cell = Option<Player>;

/// A run of cells that wins the game when uniformly owned.
pub type Line = SmallVec<[Coord; 4]>;

/// Row/column coordinate, `(0, 0)` is the top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Row-major grid of cells.
///
/// Cloning copies the cells inline, so every search branch gets its own
/// independent grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: SmallVec<[Cell; MAX_CELLS]>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Grid must have at least one cell");
        assert!(rows * cols <= MAX_CELLS, "At most {MAX_CELLS} cells supported");

        Self {
            rows,
            cols,
            cells: SmallVec::from_elem(None, rows * cols),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    /// Cell contents. Panics when `at` is outside the grid.
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        assert!(self.contains(at), "{at} is outside the grid");
        self.cells[at.row * self.cols + at.col]
    }

    /// Place a mark on an empty cell.
    ///
    /// Callers validate bounds and emptiness first; overwriting is a bug.
    pub(crate) fn place(&mut self, at: Coord, player: Player) {
        let idx = at.row * self.cols + at.col;
        debug_assert!(self.cells[idx].is_none(), "overwriting {at}");
        self.cells[idx] = Some(player);
    }

    /// Bottom-most empty row in `col`, if any.
    #[must_use]
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.get(Coord::new(row, col)).is_none())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| Coord::new(i / self.cols, i % self.cols))
    }

    /// The player owning every cell of `line`, if one does.
    #[must_use]
    pub fn line_owner(&self, line: &[Coord]) -> Option<Player> {
        let (first, rest) = line.split_first()?;
        let owner = self.get(*first)?;
        rest.iter()
            .all(|&at| self.get(at) == Some(owner))
            .then_some(owner)
    }

    /// First uniformly-owned line found in `lines`.
    #[must_use]
    pub fn winner(&self, lines: &[Line]) -> Option<Player> {
        lines.iter().find_map(|line| self.line_owner(line))
    }

    /// Count of `player`'s marks and of empty cells along a line.
    #[must_use]
    pub fn tally(&self, line: &[Coord], player: Player) -> LineTally {
        let mut tally = LineTally::default();
        for &at in line {
            match self.get(at) {
                Some(p) if p == player => tally.own += 1,
                Some(_) => tally.other += 1,
                None => tally.empty += 1,
            }
        }
        tally
    }
}

/// Mark counts along one line from one player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineTally {
    pub own: usize,
    pub other: usize,
    pub empty: usize,
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let symbols: Vec<String> = (0..self.cols)
                .map(|col| {
                    self.get(Coord::new(row, col))
                        .map_or(' ', Player::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "| {} |", symbols.join(" | "))?;
        }
        write!(f, "{}", "-".repeat(self.cols * 4 + 1))
    }
}

/// Every line of `run` cells on a `rows` x `cols` grid.
///
/// Order: horizontal, vertical, down-right diagonals, up-right diagonals,
/// each scanned from the top-left starting offset.
#[must_use]
pub fn enumerate_lines(rows: usize, cols: usize, run: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    if run == 0 {
        return lines;
    }

    let fits_rows = rows >= run;
    let fits_cols = cols >= run;

    if fits_cols {
        for row in 0..rows {
            for col in 0..=cols - run {
                lines.push((0..run).map(|i| Coord::new(row, col + i)).collect());
            }
        }
    }

    if fits_rows {
        for row in 0..=rows - run {
            for col in 0..cols {
                lines.push((0..run).map(|i| Coord::new(row + i, col)).collect());
            }
        }
    }

    if fits_rows && fits_cols {
        for row in 0..=rows - run {
            for col in 0..=cols - run {
                lines.push((0..run).map(|i| Coord::new(row + i, col + i)).collect());
            }
        }

        for row in run - 1..rows {
            for col in 0..=cols - run {
                lines.push((0..run).map(|i| Coord::new(row - i, col + i)).collect());
            }
        }
    }

    lines
}
