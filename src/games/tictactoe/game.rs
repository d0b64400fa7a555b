//! Tic-Tac-Toe board.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::{enumerate_lines, Coord, Grid, Line, MoveError, Player};
use crate::games::GameVariant;
use crate::rules::{resolve_outcome, Board, GameResult};

pub const SIZE: usize = 3;

const CENTER: [Coord; 1] = [Coord::new(1, 1)];

fn lines() -> &'static [Line] {
    static LINES: OnceLock<Vec<Line>> = OnceLock::new();
    LINES.get_or_init(|| enumerate_lines(SIZE, SIZE, SIZE))
}

/// 3x3 board; a move is the cell to mark.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    grid: Grid,
    to_move: Player,
    outcome: Option<GameResult>,
}

impl TicTacToe {
    /// Empty board, `Player::A` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            grid: Grid::new(SIZE, SIZE),
            to_move: Player::A,
            outcome: None,
        }
    }

    /// Build a position by playing `moves` from the empty board.
    pub fn from_moves(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for &mv in moves {
            board.apply(mv.into())?;
        }
        Ok(board)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for TicTacToe {
    type Move = Coord;

    fn variant(&self) -> GameVariant {
        GameVariant::TicTacToe
    }

    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn current_player(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        self.grid.empty_cells().collect()
    }

    fn apply(&mut self, at: Coord) -> Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(at) {
            return Err(MoveError::OutOfBounds {
                row: at.row,
                col: at.col,
                rows: SIZE,
                cols: SIZE,
            });
        }
        if self.grid.get(at).is_some() {
            return Err(MoveError::Occupied {
                row: at.row,
                col: at.col,
            });
        }

        self.grid.place(at, self.to_move);
        self.outcome = resolve_outcome(&self.grid, lines());
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    fn outcome(&self) -> Option<GameResult> {
        self.outcome
    }

    fn line_length(&self) -> usize {
        SIZE
    }

    fn lines(&self) -> &[Line] {
        lines()
    }

    fn positional_cells(&self) -> &[Coord] {
        &CENTER
    }

    fn positional_weight(&self) -> i32 {
        3
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = TicTacToe::new();
        assert_eq!(board.current_player(), Player::A);
        assert_eq!(board.legal_moves().len(), 9);
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_moves_in_row_major_order() {
        let board = TicTacToe::from_moves(&[(1, 1)]).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.first(), Some(&Coord::new(0, 0)));
        assert_eq!(moves.last(), Some(&Coord::new(2, 2)));
        assert!(!moves.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn test_players_alternate() {
        let mut board = TicTacToe::new();
        board.apply(Coord::new(0, 0)).unwrap();
        assert_eq!(board.current_player(), Player::B);
        assert_eq!(board.grid().get(Coord::new(0, 0)), Some(Player::A));

        board.apply(Coord::new(1, 1)).unwrap();
        assert_eq!(board.current_player(), Player::A);
        assert_eq!(board.grid().get(Coord::new(1, 1)), Some(Player::B));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut board = TicTacToe::from_moves(&[(0, 0)]).unwrap();
        let before = board.clone();

        assert_eq!(
            board.apply(Coord::new(0, 0)),
            Err(MoveError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = TicTacToe::new();
        assert!(matches!(
            board.apply(Coord::new(3, 0)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(board, TicTacToe::new());
    }

    #[test]
    fn test_column_win() {
        // A: (0,1) (1,1) (2,1)
        let board = TicTacToe::from_moves(&[(0, 1), (0, 0), (1, 1), (2, 2), (2, 1)]).unwrap();
        assert_eq!(board.outcome(), Some(GameResult::Winner(Player::A)));
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_anti_diagonal_win_for_b() {
        let board =
            TicTacToe::from_moves(&[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]).unwrap();
        assert_eq!(board.winner(), Some(Player::B));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut board = TicTacToe::from_moves(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]).unwrap();
        let before = board.clone();
        assert_eq!(board.apply(Coord::new(2, 2)), Err(MoveError::GameOver));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_draw() {
        let board = TicTacToe::from_moves(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ])
        .unwrap();

        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(GameResult::Draw));
        assert_eq!(board.winner(), None);
    }
}
