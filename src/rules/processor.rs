//! Validation and application composed into one operation.

use log::debug;

use crate::error::RuleError;
use crate::model::{Board, Move};
use crate::rules::{
    BasicMoveValidator, KoMoveValidator, MoveUpdater, MoveValidator, StandardMoveUpdater,
};

/// A validate-and-apply pipeline.
pub trait MoveProcessor {
    /// Whether every validator accepts the move.
    fn validate_move(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<bool, RuleError>;

    /// The updated board, or `Ok(None)` for an illegal move. Illegal moves
    /// are a normal, silent outcome of play, never an error, and leave the
    /// board untouched.
    fn validate_move_and_update(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<Option<Board>, RuleError>;
}

/// Runs an ordered validator chain, then a single updater.
pub struct RuleBasedMoveProcessor {
    validators: Vec<Box<dyn MoveValidator>>,
    updater: Box<dyn MoveUpdater>,
}

impl RuleBasedMoveProcessor {
    pub fn new(
        validators: Vec<Box<dyn MoveValidator>>,
        updater: Box<dyn MoveUpdater>,
    ) -> RuleBasedMoveProcessor {
        RuleBasedMoveProcessor {
            validators,
            updater,
        }
    }

    /// The standard rule stack: basic legality, then simple ko, applied with
    /// the capture-resolving updater. The ko check replays moves through the
    /// same kind of updater, so hypothetical and applied boards agree.
    pub fn standard() -> RuleBasedMoveProcessor {
        RuleBasedMoveProcessor::new(
            vec![
                Box::new(BasicMoveValidator),
                Box::new(KoMoveValidator::with_updater(Box::new(StandardMoveUpdater))),
            ],
            Box::new(StandardMoveUpdater),
        )
    }
}

impl MoveProcessor for RuleBasedMoveProcessor {
    fn validate_move(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<bool, RuleError> {
        for validator in &self.validators {
            if !validator.is_valid_move(board, mv, board_history)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn validate_move_and_update(
        &self,
        board: &Board,
        mv: &Move,
        board_history: &[Board],
    ) -> Result<Option<Board>, RuleError> {
        if !self.validate_move(board, mv, board_history)? {
            debug!("rejected {mv}");
            return Ok(None);
        }
        self.updater.place_move(board, mv).map(Some)
    }
}
