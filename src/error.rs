use crate::env::{Move, Pos};

/// A move the board refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0:?} is outside of the board")]
    OutOfRange(Pos),
    #[error("column {0} is outside of the board")]
    InvalidColumn(usize),
    #[error("cell {0:?} is already occupied")]
    Occupied(Pos),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("{0:?} does not match the placement mode of this board")]
    WrongKind(Move),
}

/// Board geometry that cannot be played on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("a {width}x{height} board exceeds {max} cells")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[error("win length {win_len} does not fit on a {width}x{height} board")]
    WinLength {
        win_len: usize,
        width: usize,
        height: usize,
    },
}

/// Agent or game configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error("window weights must satisfy four > three > two > 0 > threat, got {four}, {three}, {two}, {threat}")]
    Weights {
        four: i64,
        three: i64,
        two: i64,
        threat: i64,
    },
    #[error("search depth must be at least 1")]
    Depth,
    #[error("the solver cannot search a board of {cells} cells, at most {max} are supported")]
    SolverBoard { cells: usize, max: usize },
}

/// Malformed textual move input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected `row col` or `col`, got {0} values")]
    Arity(usize),
    #[error("`{0}` is not a valid index")]
    NotANumber(String),
}
