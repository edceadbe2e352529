//! Move legality checks.

use crate::error::RuleError;
use crate::model::{Board, Move};
use crate::rules::{checked_placement, helper};
use crate::rules::{MoveUpdater, StandardMoveUpdater};

/// One legality rule.
///
/// `Ok(false)` means the move is illegal under this rule and nothing
/// happened; `Err` means the caller broke the contract (an out-of-bounds
/// target or an empty stone). Validators compose as an all-must-pass chain.
pub trait MoveValidator {
    fn is_valid_move(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<bool, RuleError>;
}

/// Bounds, occupancy, and the suicide rule with its capture override.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicMoveValidator;

impl MoveValidator for BasicMoveValidator {
    fn is_valid_move(
        &self,
        board: &Board,
        mv: &Move,
        _board_history: &[Board],
    ) -> Result<bool, RuleError> {
        let Some((coordinate, stone)) = checked_placement(board, mv)? else {
            return Ok(true);
        };

        if !board.get(coordinate).is_empty() {
            return Ok(false);
        }

        // Placing is fine if the stone's own new chain keeps a liberty.
        if helper::liberty_count(&board.with_stone(coordinate, stone), coordinate)? > 0 {
            return Ok(true);
        }

        // Otherwise the move must capture: some neighboring enemy chain down
        // to its last liberty.
        for neighbor in helper::matching_adjacent_coordinates(board, coordinate, stone.opposite())
        {
            if helper::liberty_count(board, neighbor)? == 1 {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/// Rejects a move that would recreate the position from two plies back.
///
/// Only simple ko is checked: the hypothetical board is compared against the
/// second-most-recent board and nothing older, so longer repetition cycles
/// (triple ko and friends) are allowed through.
pub struct KoMoveValidator {
    updater: Box<dyn MoveUpdater>,
}

impl KoMoveValidator {
    pub fn new() -> KoMoveValidator {
        KoMoveValidator::with_updater(Box::new(StandardMoveUpdater))
    }

    /// The updater must be the same kind the processor applies moves with,
    /// or the hypothetical board drifts from the one actually played.
    pub fn with_updater(updater: Box<dyn MoveUpdater>) -> KoMoveValidator {
        KoMoveValidator { updater }
    }
}

impl Default for KoMoveValidator {
    fn default() -> KoMoveValidator {
        KoMoveValidator::new()
    }
}

impl MoveValidator for KoMoveValidator {
    fn is_valid_move(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<bool, RuleError> {
        if checked_placement(board, mv)?.is_none() {
            return Ok(true);
        }

        if board_history.len() < 2 {
            return Ok(true);
        }

        let previous = &board_history[board_history.len() - 2];
        let next = self.updater.place_move(board, mv)?;
        Ok(next != *previous)
    }
}
