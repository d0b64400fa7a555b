//! Board integration tests through the public API.

use boardgame_sim::core::{Coord, MoveError, Player};
use boardgame_sim::games::{create_board, AnyMove, Column, ConnectFour, GameVariant, TicTacToe};
use boardgame_sim::rules::{Board, GameResult};

// =============================================================================
// Tic-Tac-Toe
// =============================================================================

#[test]
fn test_full_board_without_line_is_draw() {
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
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_every_line_wins() {
    let lines: Vec<[(usize, usize); 3]> = vec![
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];

    for line in lines {
        // B answers on cells off the line, never completing one of its own
        let mut filler = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|cell| !line.contains(cell));
        let mut board = TicTacToe::new();
        for &cell in &line {
            board.apply(cell.into()).unwrap();
            if !board.is_terminal() {
                let reply = filler.next().unwrap();
                board.apply(reply.into()).unwrap();
            }
        }
        assert_eq!(board.winner(), Some(Player::A), "line {line:?}");
    }
}

#[test]
fn test_rejected_move_leaves_board_unchanged() {
    let mut board = TicTacToe::from_moves(&[(2, 2)]).unwrap();
    let before = board.clone();

    assert_eq!(
        board.apply(Coord::new(2, 2)),
        Err(MoveError::Occupied { row: 2, col: 2 })
    );
    assert!(board.apply(Coord::new(0, 9)).is_err());
    assert_eq!(board, before);
    assert_eq!(board.current_player(), Player::B);
}

// =============================================================================
// Connect Four
// =============================================================================

#[test]
fn test_three_stacked_is_not_terminal() {
    let board = ConnectFour::from_columns(&[0, 6, 0, 6, 0]).unwrap();
    assert!(!board.is_terminal());
    assert_eq!(board.height(0), 3);
    assert_eq!(board.current_player(), Player::B);
}

#[test]
fn test_full_board_draw() {
    let columns = [
        5, 3, 2, 3, 1, 5, 3, 1, 0, 1, 4, 1, 2, 5, 0, 5, 6, 6, 2, 0, 6, //
        0, 4, 2, 3, 0, 3, 4, 2, 3, 2, 6, 0, 4, 1, 1, 5, 4, 4, 5, 6, 6,
    ];
    let board = ConnectFour::from_columns(&columns).unwrap();
    assert_eq!(board.outcome(), Some(GameResult::Draw));
    assert_eq!(board.ply(), 42);
}

#[test]
fn test_gravity_move_order() {
    let board = ConnectFour::from_columns(&[0, 0, 0, 0, 0, 0, 6, 6, 6, 6, 6, 6]).unwrap();
    assert_eq!(
        board.legal_moves(),
        vec![Column(1), Column(2), Column(3), Column(4), Column(5)]
    );
}

// =============================================================================
// Runtime variants
// =============================================================================

#[test]
fn test_create_board_from_tag() {
    let board = create_board("ttt".parse::<GameVariant>().unwrap());
    assert_eq!(board.legal_moves().len(), 9);
    assert_eq!(board.legal_moves()[0], AnyMove::Cell(Coord::new(0, 0)));

    let board = create_board("connectfour".parse::<GameVariant>().unwrap());
    assert_eq!(board.legal_moves()[6], AnyMove::Column(Column(6)));
}

#[test]
fn test_board_display() {
    let board = TicTacToe::from_moves(&[(0, 0), (1, 1)]).unwrap();
    let rendered = board.to_string();
    assert!(rendered.starts_with("| X |   |   |"));
    assert!(rendered.contains("|   | O |   |"));
}
