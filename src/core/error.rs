//! Error types.
//!
//! `MoveError` is the cheap, `Copy` failure returned by `Board::apply` in the
//! search hot path. `SimError` covers configuration and driver failures.
//! Precondition violations inside the core (asking for a move when none
//! exist) are panics, not errors.

use thiserror::Error;

/// Why a move was rejected. The board is left untouched.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("move ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("move does not belong to this game variant")]
    WrongVariant,
}

/// Errors raised while configuring or driving games.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("unknown game variant: {0}")]
    UnknownVariant(String),

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("strategy '{0}' needs interactive input and cannot be simulated")]
    UnsupportedStrategy(String),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("unknown first-player policy: {0}")]
    InvalidFirstPlayer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{strategy} proposed illegal move {mv}: {source}")]
    IllegalMove {
        strategy: String,
        mv: String,
        #[source]
        source: MoveError,
    },
}

/// Convenience Result type for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;
