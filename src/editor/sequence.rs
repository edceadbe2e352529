//! Rule-checked move sequence editing.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::history::SequenceHistory;
use crate::model::{Board, Coordinate, Move, Stone};
use crate::rules::MoveProcessor;

/// Alternating, rule-checked play over a history, with undo/redo.
///
/// The editor is a persistent value, like the history under it: every
/// operation returns a new editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSequenceEditor {
    history: SequenceHistory,
    initial_turn: Stone,
}

impl MoveSequenceEditor {
    pub fn new(history: SequenceHistory) -> MoveSequenceEditor {
        MoveSequenceEditor::with_initial_turn(history, Stone::Black)
    }

    /// `initial_turn` must be `Black` or `White`.
    pub fn with_initial_turn(history: SequenceHistory, initial_turn: Stone) -> MoveSequenceEditor {
        debug_assert!(!initial_turn.is_empty());
        MoveSequenceEditor {
            history,
            initial_turn,
        }
    }

    pub fn history(&self) -> &SequenceHistory {
        &self.history
    }

    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn current_move(&self) -> Option<&Move> {
        self.history.current_move()
    }

    pub fn current_turn(&self) -> Stone {
        match self.history.current_move() {
            Some(mv) => mv.stone().opposite(),
            None => self.initial_turn,
        }
    }

    /// Plays the current turn's stone at `coordinate` if the rules allow it;
    /// `Ok(None)` otherwise, with the editor unchanged.
    pub fn validate_and_place_move(
        &self,
        coordinate: Coordinate,
        processor: &dyn MoveProcessor,
    ) -> Result<Option<MoveSequenceEditor>, RuleError> {
        let mv = Move::place(coordinate, self.current_turn());
        let Some(board) = processor.validate_move_and_update(
            self.history.current_board(),
            &mv,
            self.history.board_history(),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(MoveSequenceEditor {
            history: self.history.record(board, mv),
            initial_turn: self.initial_turn,
        }))
    }

    pub fn undo(&self, steps: usize) -> MoveSequenceEditor {
        self.with_history(self.history.undo(steps))
    }

    pub fn redo(&self, steps: usize) -> MoveSequenceEditor {
        self.with_history(self.history.redo(steps))
    }

    pub fn undo_all(&self) -> MoveSequenceEditor {
        self.with_history(self.history.undo_all())
    }

    pub fn redo_all(&self) -> MoveSequenceEditor {
        self.with_history(self.history.redo_all())
    }

    pub fn can_undo(&self, steps: usize) -> bool {
        self.history.can_undo(steps)
    }

    pub fn can_redo(&self, steps: usize) -> bool {
        self.history.can_redo(steps)
    }

    fn with_history(&self, history: SequenceHistory) -> MoveSequenceEditor {
        MoveSequenceEditor {
            history,
            initial_turn: self.initial_turn,
        }
    }
}
