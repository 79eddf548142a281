//! Error types for the rules engine and its inputs

use std::path::PathBuf;

use crate::game::Move;

/// Rejection of a move by the rules engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over, reset before moving again")]
    GameOver,

    #[error("illegal move {0}")]
    Illegal(Move),
}

/// Malformed algebraic coordinate text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("no coordinate given")]
    Empty,

    #[error("expected a column letter and a row number, got {0:?}")]
    WrongLength(String),

    #[error("column {column:?} is not on a {dimension}x{dimension} board")]
    BadColumn { column: char, dimension: usize },

    #[error("row {row:?} is not on a {dimension}x{dimension} board")]
    BadRow { row: char, dimension: usize },

    #[error("expected a move like B1->B2, got {0:?}")]
    BadMove(String),
}

/// Malformed board position text (e.g. "PPP/___/CCC")
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("board must have between {min} and {max} rows, got {rows}")]
    BadDimension { rows: usize, min: usize, max: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("unknown cell symbol {0:?}")]
    UnknownSymbol(char),
}

/// Invalid or unreadable game configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimension must be between {min} and {max}, got {dimension}")]
    InvalidDimension { dimension: usize, min: usize, max: usize },

    #[error("a session needs at least one round")]
    NoRounds,

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failure of a move selector to produce a decision
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("invalid coordinate: {0}")]
    Input(#[from] NotationError),

    #[error("end of input")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    #[test]
    fn test_move_error_display() {
        let mv = Move::new(Square::new(0, 0), Square::new(1, 1));
        assert_eq!(MoveError::Illegal(mv).to_string(), "illegal move A1->B2");
        assert_eq!(
            MoveError::GameOver.to_string(),
            "game is over, reset before moving again"
        );
    }

    #[test]
    fn test_notation_error_display() {
        let err = NotationError::BadColumn { column: 'Z', dimension: 4 };
        assert_eq!(err.to_string(), "column 'Z' is not on a 4x4 board");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDimension { dimension: 9, min: 3, max: 6 };
        assert_eq!(
            err.to_string(),
            "board dimension must be between 3 and 6, got 9"
        );
    }

    #[test]
    fn test_select_error_from_notation() {
        let err: SelectError = NotationError::Empty.into();
        assert!(matches!(err, SelectError::Input(NotationError::Empty)));
    }
}
