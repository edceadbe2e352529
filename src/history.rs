//! Branching-discard move history.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Board, Move};

/// An undo/redo log of boards and the moves between them.
///
/// `board_history[i]` is the position after `move_history[i - 1]`; the
/// cursor selects the current position, so `board_history.len() ==
/// move_history.len() + 1` always holds. Histories are persistent values:
/// every operation returns a new history and leaves the receiver untouched.
/// Recording while the cursor is rewound discards the redo branch for good.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceHistory {
    board_history: Vec<Board>,
    move_history: Vec<Move>,
    current_index: usize,
}

impl SequenceHistory {
    pub fn new(initial_board: Board) -> SequenceHistory {
        SequenceHistory {
            board_history: vec![initial_board],
            move_history: Vec::new(),
            current_index: 0,
        }
    }

    pub fn initial_board(&self) -> &Board {
        &self.board_history[0]
    }

    pub fn current_board(&self) -> &Board {
        &self.board_history[self.current_index]
    }

    /// The move that produced the current board, or `None` at the initial
    /// position.
    pub fn current_move(&self) -> Option<&Move> {
        if self.current_index == 0 {
            None
        } else {
            Some(&self.move_history[self.current_index - 1])
        }
    }

    pub fn board_history(&self) -> &[Board] {
        &self.board_history
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Appends a position reached by `mv`, discarding any redo entries past
    /// the cursor first. The only operation that can shrink a history.
    pub fn record(&self, board: Board, mv: Move) -> SequenceHistory {
        let discarded = self.board_history.len() - (self.current_index + 1);
        if discarded > 0 {
            debug!("recording over a rewound history discards {discarded} redo entries");
        }

        let mut board_history = self.board_history[..=self.current_index].to_vec();
        let mut move_history = self.move_history[..self.current_index].to_vec();
        board_history.push(board);
        move_history.push(mv);

        SequenceHistory {
            board_history,
            move_history,
            current_index: self.current_index + 1,
        }
    }

    /// Moves the cursor back up to `steps` positions, stopping silently at
    /// the initial board.
    pub fn undo(&self, steps: usize) -> SequenceHistory {
        self.with_index(self.current_index - steps.min(self.current_index))
    }

    /// Moves the cursor forward up to `steps` positions, stopping silently
    /// at the latest board.
    pub fn redo(&self, steps: usize) -> SequenceHistory {
        let available = self.board_history.len() - 1 - self.current_index;
        self.with_index(self.current_index + steps.min(available))
    }

    pub fn undo_all(&self) -> SequenceHistory {
        self.with_index(0)
    }

    pub fn redo_all(&self) -> SequenceHistory {
        self.with_index(self.board_history.len() - 1)
    }

    pub fn can_undo(&self, steps: usize) -> bool {
        steps <= self.current_index
    }

    pub fn can_redo(&self, steps: usize) -> bool {
        self.current_index + steps <= self.board_history.len() - 1
    }

    /// Collapses the history to a single position: the supplied board, or
    /// the original initial board.
    pub fn reset(&self, initial_board: Option<Board>) -> SequenceHistory {
        SequenceHistory::new(initial_board.unwrap_or_else(|| self.board_history[0].clone()))
    }

    fn with_index(&self, current_index: usize) -> SequenceHistory {
        SequenceHistory {
            board_history: self.board_history.clone(),
            move_history: self.move_history.clone(),
            current_index,
        }
    }
}
