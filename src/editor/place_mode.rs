//! Sequence editing with a configurable placement color.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::history::SequenceHistory;
use crate::model::{Board, Coordinate, Move, Stone};
use crate::rules::MoveProcessor;

/// Which color the editor places next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceMode {
    OnlyBlack,
    OnlyWhite,
    Alternate,
}

impl PlaceMode {
    fn starting_stone(self) -> Stone {
        match self {
            PlaceMode::OnlyBlack | PlaceMode::Alternate => Stone::Black,
            PlaceMode::OnlyWhite => Stone::White,
        }
    }
}

/// Rule-checked sequence editing where the placed color follows an editing
/// mode instead of strict game turns.
///
/// Moving through history re-derives whose stone comes next from the moves
/// themselves, so re-entering a position also restores its turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceModeSequenceEditor {
    history: SequenceHistory,
    place_mode: PlaceMode,
    current_turn: Stone,
}

impl PlaceModeSequenceEditor {
    pub fn new(history: SequenceHistory) -> PlaceModeSequenceEditor {
        PlaceModeSequenceEditor::with_mode(history, PlaceMode::OnlyBlack)
    }

    pub fn with_mode(history: SequenceHistory, place_mode: PlaceMode) -> PlaceModeSequenceEditor {
        PlaceModeSequenceEditor {
            history,
            place_mode,
            current_turn: place_mode.starting_stone(),
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
        self.current_turn
    }

    pub fn place_mode(&self) -> PlaceMode {
        self.place_mode
    }

    /// Places the current turn's stone at `coordinate` if the rules allow
    /// it; `Ok(None)` otherwise, with the editor unchanged.
    pub fn validate_and_place_move(
        &self,
        coordinate: Coordinate,
        processor: &dyn MoveProcessor,
    ) -> Result<Option<PlaceModeSequenceEditor>, RuleError> {
        let mv = Move::place(coordinate, self.current_turn);
        let Some(board) = processor.validate_move_and_update(
            self.history.current_board(),
            &mv,
            self.history.board_history(),
        )?
        else {
            return Ok(None);
        };

        let placed = PlaceModeSequenceEditor {
            history: self.history.record(board, mv),
            place_mode: self.place_mode,
            current_turn: self.current_turn,
        };
        Ok(Some(placed.turn_from_place_mode()))
    }

    /// Switching modes resets the color to the mode's default.
    pub fn set_place_mode(&self, place_mode: PlaceMode) -> PlaceModeSequenceEditor {
        PlaceModeSequenceEditor {
            history: self.history.clone(),
            place_mode,
            current_turn: place_mode.starting_stone(),
        }
    }

    pub fn set_current_turn(&self, turn: Stone) -> Result<PlaceModeSequenceEditor, RuleError> {
        if turn.is_empty() {
            return Err(RuleError::EmptyStone);
        }
        Ok(PlaceModeSequenceEditor {
            history: self.history.clone(),
            place_mode: self.place_mode,
            current_turn: turn,
        })
    }

    pub fn undo(&self, steps: usize) -> PlaceModeSequenceEditor {
        self.with_history(self.history.undo(steps)).turn_from_history()
    }

    pub fn redo(&self, steps: usize) -> PlaceModeSequenceEditor {
        self.with_history(self.history.redo(steps)).turn_from_history()
    }

    pub fn undo_all(&self) -> PlaceModeSequenceEditor {
        self.with_history(self.history.undo_all()).turn_from_history()
    }

    pub fn redo_all(&self) -> PlaceModeSequenceEditor {
        self.with_history(self.history.redo_all()).turn_from_history()
    }

    pub fn can_undo(&self, steps: usize) -> bool {
        self.history.can_undo(steps)
    }

    pub fn can_redo(&self, steps: usize) -> bool {
        self.history.can_redo(steps)
    }

    /// Back to a single-position history and the default Black turn.
    pub fn reset(&self, initial_board: Option<Board>) -> PlaceModeSequenceEditor {
        PlaceModeSequenceEditor {
            history: self.history.reset(initial_board),
            place_mode: self.place_mode,
            current_turn: Stone::Black,
        }
    }

    /// The stone of the move that would be redone is the next to place;
    /// at the tip of the history, fall back to the mode.
    fn turn_from_history(&self) -> PlaceModeSequenceEditor {
        let current_turn = if self.history.can_redo(1) {
            self.history
                .redo(1)
                .current_move()
                .map(|mv| mv.stone())
                .unwrap_or(self.current_turn)
        } else if self.place_mode == PlaceMode::Alternate {
            self.history
                .current_move()
                .map(|mv| mv.stone().opposite())
                .unwrap_or(Stone::Black)
        } else {
            self.current_turn
        };

        PlaceModeSequenceEditor {
            history: self.history.clone(),
            place_mode: self.place_mode,
            current_turn,
        }
    }

    fn turn_from_place_mode(&self) -> PlaceModeSequenceEditor {
        let current_turn = if self.place_mode == PlaceMode::Alternate {
            self.current_turn.opposite()
        } else {
            self.current_turn
        };

        PlaceModeSequenceEditor {
            history: self.history.clone(),
            place_mode: self.place_mode,
            current_turn,
        }
    }

    fn with_history(&self, history: SequenceHistory) -> PlaceModeSequenceEditor {
        PlaceModeSequenceEditor {
            history,
            place_mode: self.place_mode,
            current_turn: self.current_turn,
        }
    }
}
