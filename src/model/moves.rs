//! Moves: stone placements and passes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coordinate, Stone};

/// One turn of play: a stone placed at a coordinate, or a pass.
///
/// A pass carries the stone of the player who passed so that turn order can
/// still be derived from the last move in a history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Place { coordinate: Coordinate, stone: Stone },
    Pass { stone: Stone },
}

impl Move {
    pub fn place(coordinate: Coordinate, stone: Stone) -> Move {
        Move::Place { coordinate, stone }
    }

    pub fn pass(stone: Stone) -> Move {
        Move::Pass { stone }
    }

    /// The stone of the player who made this move.
    pub fn stone(&self) -> Stone {
        match *self {
            Move::Place { stone, .. } => stone,
            Move::Pass { stone } => stone,
        }
    }

    /// The target coordinate, or `None` for a pass.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match *self {
            Move::Place { coordinate, .. } => Some(coordinate),
            Move::Pass { .. } => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place { coordinate, stone } => write!(f, "{coordinate} {stone:?}"),
            Move::Pass { stone } => write!(f, "pass {stone:?}"),
        }
    }
}
