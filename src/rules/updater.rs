//! Board updates for validated moves.

use std::collections::HashSet;

use log::debug;

use crate::error::RuleError;
use crate::model::{Board, Coordinate, Move, Stone};
use crate::rules::{checked_placement, helper};

/// Applies a move to a board, resolving captures.
///
/// This layer assumes the move was already validated: an out-of-bounds
/// target, an empty stone, or an occupied target fails instead of returning
/// an "illegal" verdict, because reaching it with such a move is a bug
/// upstream.
pub trait MoveUpdater {
    fn place_move(&self, board: &Board, mv: &Move) -> Result<Board, RuleError>;
}

/// The standard updater: place the stone, then remove every adjacent enemy
/// chain that was down to its final liberty, as one atomic new board.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMoveUpdater;

impl MoveUpdater for StandardMoveUpdater {
    fn place_move(&self, board: &Board, mv: &Move) -> Result<Board, RuleError> {
        let Some((coordinate, stone)) = checked_placement(board, mv)? else {
            // A pass leaves the board exactly as it was.
            return Ok(board.clone());
        };

        if !board.get(coordinate).is_empty() {
            return Err(RuleError::Occupied(coordinate));
        }

        // Captures are decided against the pre-placement board: an enemy
        // chain dies iff this point was its last liberty.
        let mut captured: HashSet<Coordinate> = HashSet::new();
        for neighbor in helper::matching_adjacent_coordinates(board, coordinate, stone.opposite())
        {
            if captured.contains(&neighbor) {
                continue;
            }
            if helper::liberty_count(board, neighbor)? == 1 {
                captured.extend(helper::stone_chain(board, neighbor)?);
            }
        }

        if !captured.is_empty() {
            debug!(
                "{stone:?} at {coordinate} captures {} stones",
                captured.len()
            );
        }

        let placed = board.with_stone(coordinate, stone);
        Ok(placed.with_stones(captured.into_iter().map(|c| (c, Stone::Empty))))
    }
}
