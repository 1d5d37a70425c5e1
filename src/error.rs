use std::path::PathBuf;

use crate::game::DiscColor;

/// Errors raised when a placement cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("this position cannot receive a disc: ({row}, {col})")]
    IllegalPlacement { row: usize, col: usize },

    #[error("game already concluded")]
    GameConcluded,

    #[error("a flip sequence is still in progress")]
    FlipInProgress,
}

/// Errors raised when a CPU strategy is invoked outside its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("no legal moves available for {0}")]
    NoLegalMoves(DiscColor),
}

/// Errors raised when constructing a board from invalid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardShapeError {
    #[error("board size {0} is invalid: the size must be an even number of at least 4")]
    InvalidSize(usize),

    #[error("board is not square: expected {expected} columns, row {row} has {found}")]
    NotSquare {
        expected: usize,
        row: usize,
        found: usize,
    },
}

/// Errors that can occur when loading game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board shape: {0}")]
    Board(#[from] BoardShapeError),

    #[error("config validation error: {0}")]
    Validation(String),
}
