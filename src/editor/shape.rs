//! Free-form board composition with no rule checks and no history.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::model::{Board, Coordinate, Stone};

/// What a left click does in a [`BoardShapeEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditMode {
    Add,
    Remove,
}

/// Composes a fixed position stone by stone. Placement ignores liberties,
/// captures, and turn order entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardShapeEditor {
    board: Board,
    edit_mode: EditMode,
    stone_to_place: Stone,
}

impl BoardShapeEditor {
    pub fn new(board: Board) -> BoardShapeEditor {
        BoardShapeEditor {
            board,
            edit_mode: EditMode::Add,
            stone_to_place: Stone::Black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn stone_to_place(&self) -> Stone {
        self.stone_to_place
    }

    pub fn set_edit_mode(&self, edit_mode: EditMode) -> BoardShapeEditor {
        BoardShapeEditor {
            board: self.board.clone(),
            edit_mode,
            stone_to_place: self.stone_to_place,
        }
    }

    pub fn set_stone_to_place(&self, stone: Stone) -> Result<BoardShapeEditor, RuleError> {
        if stone.is_empty() {
            return Err(RuleError::EmptyStone);
        }
        Ok(BoardShapeEditor {
            board: self.board.clone(),
            edit_mode: self.edit_mode,
            stone_to_place: stone,
        })
    }

    /// Adds or removes at `coordinate` depending on the mode. Adding onto an
    /// occupied point returns `None`.
    pub fn left_click(&self, coordinate: Coordinate) -> Option<BoardShapeEditor> {
        match self.edit_mode {
            EditMode::Add => self.add_stone(coordinate),
            EditMode::Remove => Some(self.remove_stone(coordinate)),
        }
    }

    /// Removes at `coordinate` regardless of the mode.
    pub fn right_click(&self, coordinate: Coordinate) -> BoardShapeEditor {
        self.remove_stone(coordinate)
    }

    pub fn reset(&self, initial_board: Board) -> BoardShapeEditor {
        BoardShapeEditor {
            board: initial_board,
            edit_mode: self.edit_mode,
            stone_to_place: self.stone_to_place,
        }
    }

    fn add_stone(&self, coordinate: Coordinate) -> Option<BoardShapeEditor> {
        if !self.board.get(coordinate).is_empty() {
            return None;
        }
        Some(self.with_board(self.board.with_stone(coordinate, self.stone_to_place)))
    }

    fn remove_stone(&self, coordinate: Coordinate) -> BoardShapeEditor {
        self.with_board(self.board.with_stone(coordinate, Stone::Empty))
    }

    fn with_board(&self, board: Board) -> BoardShapeEditor {
        BoardShapeEditor {
            board,
            edit_mode: self.edit_mode,
            stone_to_place: self.stone_to_place,
        }
    }
}

/// What a left click does in a [`PlaceRemovableShapeEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovableEditMode {
    OnlyBlack,
    OnlyWhite,
    Alternate,
    Remove,
}

/// Shape editing with per-mode colors and a removal mode; right click always
/// removes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceRemovableShapeEditor {
    board: Board,
    edit_mode: RemovableEditMode,
    stone_to_place: Stone,
}

impl PlaceRemovableShapeEditor {
    pub fn new(board: Board) -> PlaceRemovableShapeEditor {
        PlaceRemovableShapeEditor {
            board,
            edit_mode: RemovableEditMode::OnlyBlack,
            stone_to_place: Stone::Black,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn edit_mode(&self) -> RemovableEditMode {
        self.edit_mode
    }

    pub fn stone_to_place(&self) -> Stone {
        self.stone_to_place
    }

    /// Switching modes picks the mode's color; `Remove` keeps the current
    /// one for when placement resumes.
    pub fn set_edit_mode(&self, edit_mode: RemovableEditMode) -> PlaceRemovableShapeEditor {
        let stone_to_place = match edit_mode {
            RemovableEditMode::OnlyBlack | RemovableEditMode::Alternate => Stone::Black,
            RemovableEditMode::OnlyWhite => Stone::White,
            RemovableEditMode::Remove => self.stone_to_place,
        };
        PlaceRemovableShapeEditor {
            board: self.board.clone(),
            edit_mode,
            stone_to_place,
        }
    }

    pub fn set_stone_to_place(&self, stone: Stone) -> Result<PlaceRemovableShapeEditor, RuleError> {
        if stone.is_empty() {
            return Err(RuleError::EmptyStone);
        }
        Ok(PlaceRemovableShapeEditor {
            board: self.board.clone(),
            edit_mode: self.edit_mode,
            stone_to_place: stone,
        })
    }

    /// Places (or removes, in `Remove` mode) at `coordinate`. Placing onto
    /// an occupied point returns `None`.
    pub fn left_click(&self, coordinate: Coordinate) -> Option<PlaceRemovableShapeEditor> {
        if self.edit_mode == RemovableEditMode::Remove {
            return Some(self.remove_stone(coordinate));
        }
        self.add_stone(coordinate)
            .map(|editor| editor.update_turn_by_edit_mode())
    }

    pub fn right_click(&self, coordinate: Coordinate) -> PlaceRemovableShapeEditor {
        self.remove_stone(coordinate).update_turn_by_edit_mode()
    }

    pub fn reset(&self, initial_board: Board) -> PlaceRemovableShapeEditor {
        PlaceRemovableShapeEditor {
            board: initial_board,
            edit_mode: self.edit_mode,
            stone_to_place: self.stone_to_place,
        }
    }

    fn update_turn_by_edit_mode(&self) -> PlaceRemovableShapeEditor {
        let stone_to_place = if self.edit_mode == RemovableEditMode::Alternate {
            self.stone_to_place.opposite()
        } else {
            self.stone_to_place
        };
        PlaceRemovableShapeEditor {
            board: self.board.clone(),
            edit_mode: self.edit_mode,
            stone_to_place,
        }
    }

    fn add_stone(&self, coordinate: Coordinate) -> Option<PlaceRemovableShapeEditor> {
        if !self.board.get(coordinate).is_empty() {
            return None;
        }
        Some(PlaceRemovableShapeEditor {
            board: self.board.with_stone(coordinate, self.stone_to_place),
            edit_mode: self.edit_mode,
            stone_to_place: self.stone_to_place,
        })
    }

    fn remove_stone(&self, coordinate: Coordinate) -> PlaceRemovableShapeEditor {
        PlaceRemovableShapeEditor {
            board: self.board.with_stone(coordinate, Stone::Empty),
            edit_mode: self.edit_mode,
            stone_to_place: self.stone_to_place,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_shape_editor_initial_state() {
        let editor = BoardShapeEditor::new(Board::new(5));
        assert_eq!(editor.board(), &Board::new(5));
        assert_eq!(editor.edit_mode(), EditMode::Add);
        assert_eq!(editor.stone_to_place(), Stone::Black);
    }

    #[test]
    fn test_shape_editor_set_stone_rejects_empty() {
        let editor = BoardShapeEditor::new(Board::new(5));
        assert_eq!(
            editor.set_stone_to_place(Stone::Empty),
            Err(RuleError::EmptyStone)
        );
    }

    #[test]
    fn test_shape_editor_add_and_occupied() {
        let editor = BoardShapeEditor::new(Board::new(5));

        let added = editor.left_click(at(2, 2)).unwrap();
        assert_eq!(added.board().get(at(2, 2)), Stone::Black);

        // Adding onto an occupied point is refused even for the other color.
        assert_eq!(added.left_click(at(2, 2)), None);
        assert_eq!(
            added
                .set_stone_to_place(Stone::White)
                .unwrap()
                .left_click(at(2, 2)),
            None
        );
    }

    #[test]
    fn test_shape_editor_remove_mode_and_right_click() {
        let editor = BoardShapeEditor::new(Board::new(5));
        let added = editor.left_click(at(2, 2)).unwrap();

        let removed = added.set_edit_mode(EditMode::Remove).left_click(at(2, 2)).unwrap();
        assert_eq!(removed.board().get(at(2, 2)), Stone::Empty);

        // Right click removes without switching modes.
        let removed_again = added.right_click(at(2, 2));
        assert_eq!(removed_again.board().get(at(2, 2)), Stone::Empty);
        assert_eq!(removed_again.edit_mode(), EditMode::Add);
    }

    #[test]
    fn test_shape_editor_reset() {
        let editor = BoardShapeEditor::new(Board::new(5));
        let added = editor.left_click(at(0, 0)).unwrap();

        let reset = added.reset(Board::new(5));
        assert_eq!(reset.board(), &Board::new(5));
    }

    #[test]
    fn test_removable_editor_mode_colors() {
        let editor = PlaceRemovableShapeEditor::new(Board::new(5));

        let white = editor.set_edit_mode(RemovableEditMode::OnlyWhite);
        assert_eq!(white.stone_to_place(), Stone::White);

        let alternate = white.set_edit_mode(RemovableEditMode::Alternate);
        assert_eq!(alternate.stone_to_place(), Stone::Black);

        // Remove mode keeps the color for when placement resumes.
        let remove = white.set_edit_mode(RemovableEditMode::Remove);
        assert_eq!(remove.stone_to_place(), Stone::White);
    }

    #[test]
    fn test_removable_editor_alternate_toggles() {
        let editor =
            PlaceRemovableShapeEditor::new(Board::new(5)).set_edit_mode(RemovableEditMode::Alternate);

        let first = editor.left_click(at(0, 0)).unwrap();
        assert_eq!(first.board().get(at(0, 0)), Stone::Black);
        assert_eq!(first.stone_to_place(), Stone::White);

        let second = first.left_click(at(1, 1)).unwrap();
        assert_eq!(second.board().get(at(1, 1)), Stone::White);
        assert_eq!(second.stone_to_place(), Stone::Black);
    }

    #[test]
    fn test_removable_editor_only_modes_keep_color() {
        let editor =
            PlaceRemovableShapeEditor::new(Board::new(5)).set_edit_mode(RemovableEditMode::OnlyWhite);

        let placed = editor.left_click(at(0, 0)).unwrap();
        assert_eq!(placed.board().get(at(0, 0)), Stone::White);
        assert_eq!(placed.stone_to_place(), Stone::White);
    }

    #[test]
    fn test_removable_editor_remove_mode_and_occupied() {
        let editor =
            PlaceRemovableShapeEditor::new(Board::new(5)).set_edit_mode(RemovableEditMode::Alternate);
        let placed = editor.left_click(at(0, 0)).unwrap();

        assert_eq!(placed.left_click(at(0, 0)), None);

        let removed = placed.set_edit_mode(RemovableEditMode::Remove).left_click(at(0, 0)).unwrap();
        assert_eq!(removed.board().get(at(0, 0)), Stone::Empty);

        let removed_by_right = placed.right_click(at(0, 0));
        assert_eq!(removed_by_right.board().get(at(0, 0)), Stone::Empty);
    }

    #[test]
    fn test_removable_editor_reset() {
        let editor = PlaceRemovableShapeEditor::new(Board::new(5));
        let placed = editor.left_click(at(3, 3)).unwrap();

        let reset = placed.reset(Board::new(5));
        assert_eq!(reset.board(), &Board::new(5));
    }
}
