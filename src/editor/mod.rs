//! History- and board-editing tools built on the core rules.

mod place_mode;
mod sequence;
mod shape;

pub use place_mode::{PlaceMode, PlaceModeSequenceEditor};
pub use sequence::MoveSequenceEditor;
pub use shape::{BoardShapeEditor, EditMode, PlaceRemovableShapeEditor, RemovableEditMode};
