//! Placement rules: chain/liberty arithmetic, validators, the updater, and
//! the processor that composes them.

pub mod helper;
mod processor;
mod updater;
mod validator;

pub use processor::{MoveProcessor, RuleBasedMoveProcessor};
pub use updater::{MoveUpdater, StandardMoveUpdater};
pub use validator::{BasicMoveValidator, KoMoveValidator, MoveValidator};

use crate::error::RuleError;
use crate::model::{Board, Coordinate, Move, Stone};

/// Shared rule-layer precondition: a pass maps to `None`; a placement must
/// land on the board and carry a real stone.
pub(crate) fn checked_placement(
    board: &Board,
    mv: &Move,
) -> Result<Option<(Coordinate, Stone)>, RuleError> {
    let Move::Place { coordinate, stone } = *mv else {
        return Ok(None);
    };
    if !board.is_in_bounds(coordinate) {
        return Err(RuleError::out_of_bounds(coordinate, board.dimension()));
    }
    if stone.is_empty() {
        return Err(RuleError::EmptyStone);
    }
    Ok(Some((coordinate, stone)))
}
