//! Error types for rule preconditions and board parsing.

use thiserror::Error;

use crate::model::Coordinate;

/// A violated calling contract in the rule layer.
///
/// These mark bugs in the caller, not illegal moves: an occupied target, a
/// suicide, or a ko repetition is reported as an ordinary `false`/`None`
/// result with no state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("coordinate ({row}, {col}) is out of bounds for a {dimension}x{dimension} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        dimension: usize,
    },

    #[error("move stone cannot be empty")]
    EmptyStone,

    #[error("cannot inspect the chain at empty coordinate {0}")]
    EmptyCoordinate(Coordinate),

    #[error("cannot place a stone at occupied coordinate {0}")]
    Occupied(Coordinate),
}

impl RuleError {
    pub(crate) fn out_of_bounds(coordinate: Coordinate, dimension: usize) -> RuleError {
        RuleError::OutOfBounds {
            row: coordinate.row,
            col: coordinate.col,
            dimension,
        }
    }
}

/// A malformed ASCII board fixture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("invalid board character {0:?}")]
    InvalidCharacter(char),

    #[error("row {row} has {len} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("board text is empty")]
    Empty,
}
