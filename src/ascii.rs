//! ASCII board fixtures: `+` empty, `x` black, `o` white, one row per line.
//!
//! The codec round-trips exactly: `ascii_to_board` then `board_to_ascii`
//! reproduces a well-formed string, and the reverse composition is the
//! identity on boards.

use crate::error::BoardParseError;
use crate::model::{Board, Coordinate, Stone};

/// Parses a board from its ASCII form. Surrounding whitespace is ignored;
/// the row count fixes the dimension and every row must match it.
pub fn ascii_to_board(text: &str) -> Result<Board, BoardParseError> {
    let rows: Vec<&str> = text.trim().lines().collect();
    if rows.is_empty() {
        return Err(BoardParseError::Empty);
    }

    let dimension = rows.len();
    let mut cells = Vec::with_capacity(dimension * dimension);
    for (row, line) in rows.iter().enumerate() {
        let len = line.chars().count();
        if len != dimension {
            return Err(BoardParseError::RaggedRow {
                row,
                len,
                expected: dimension,
            });
        }
        for ch in line.chars() {
            cells.push(match ch {
                '+' => Stone::Empty,
                'x' => Stone::Black,
                'o' => Stone::White,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            });
        }
    }

    Ok(Board::from_cells(dimension, cells))
}

/// Renders a board to its ASCII form, rows separated by single newlines with
/// no trailing newline.
pub fn board_to_ascii(board: &Board) -> String {
    let dimension = board.dimension();
    let mut out = String::with_capacity(dimension * (dimension + 1));
    for row in 0..dimension {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..dimension {
            out.push(match board.get(Coordinate::new(row, col)) {
                Stone::Empty => '+',
                Stone::Black => 'x',
                Stone::White => 'o',
            });
        }
    }
    out
}
