//! The playable game aggregate.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::history::SequenceHistory;
use crate::model::{Board, Coordinate, Move, Stone};
use crate::rules::MoveProcessor;

/// Default compensation points for White.
pub const DEFAULT_KOMI: f64 = 6.5;

/// A game in progress: a move history plus turn, komi, and capture
/// bookkeeping.
///
/// Games are persistent values; `play_move` and `pass_turn` return updated
/// games and never touch the receiver. The move processor is supplied per
/// call, so a game stays plain serializable data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    history: SequenceHistory,
    initial_turn: Stone,
    komi: f64,
    captured_by_black: usize,
    captured_by_white: usize,
}

impl Game {
    /// Black to move first, default komi, no captures.
    pub fn new(history: SequenceHistory) -> Game {
        Game::with_settings(history, Stone::Black, DEFAULT_KOMI)
    }

    /// `initial_turn` must be `Black` or `White`.
    pub fn with_settings(history: SequenceHistory, initial_turn: Stone, komi: f64) -> Game {
        debug_assert!(!initial_turn.is_empty());
        Game {
            history,
            initial_turn,
            komi,
            captured_by_black: 0,
            captured_by_white: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.history.current_board().dimension()
    }

    pub fn history(&self) -> &SequenceHistory {
        &self.history
    }

    pub fn board_history(&self) -> &[Board] {
        self.history.board_history()
    }

    pub fn move_history(&self) -> &[Move] {
        self.history.move_history()
    }

    pub fn initial_board(&self) -> &Board {
        self.history.initial_board()
    }

    pub fn current_board(&self) -> &Board {
        self.history.current_board()
    }

    pub fn current_move(&self) -> Option<&Move> {
        self.history.current_move()
    }

    pub fn initial_turn(&self) -> Stone {
        self.initial_turn
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Stones Black has taken from White so far.
    pub fn captured_by_black(&self) -> usize {
        self.captured_by_black
    }

    /// Stones White has taken from Black so far.
    pub fn captured_by_white(&self) -> usize {
        self.captured_by_white
    }

    /// Whose move it is: the opposite of the last move's stone, or the
    /// initial turn before any move.
    pub fn current_turn(&self) -> Stone {
        match self.history.current_move() {
            Some(mv) => mv.stone().opposite(),
            None => self.initial_turn,
        }
    }

    /// Plays the current player's stone at `coordinate`.
    ///
    /// `Ok(None)` for a game-illegal move, with no state change anywhere.
    /// An out-of-bounds coordinate is a caller bug and fails.
    pub fn play_move(
        &self,
        coordinate: Coordinate,
        processor: &dyn MoveProcessor,
    ) -> Result<Option<Game>, RuleError> {
        let turn = self.current_turn();
        let mv = Move::place(coordinate, turn);

        let current_board = self.history.current_board();
        let Some(new_board) =
            processor.validate_move_and_update(current_board, &mv, self.history.board_history())?
        else {
            return Ok(None);
        };

        let (black_delta, white_delta) = captured_delta(current_board, &new_board, turn);
        if black_delta + white_delta > 0 {
            debug!("{turn:?} captured {} stones", black_delta + white_delta);
        }

        Ok(Some(Game {
            history: self.history.record(new_board, mv),
            initial_turn: self.initial_turn,
            komi: self.komi,
            captured_by_black: self.captured_by_black + black_delta,
            captured_by_white: self.captured_by_white + white_delta,
        }))
    }

    /// Records a pass for the current player against the unchanged board,
    /// advancing the turn.
    pub fn pass_turn(&self) -> Game {
        let mv = Move::pass(self.current_turn());
        Game {
            history: self.history.record(self.history.current_board().clone(), mv),
            ..self.clone()
        }
    }

    /// Restarts the game: the history collapses (optionally onto a new
    /// initial board) and both capture counters go back to zero with it.
    pub fn reset(&self, initial_board: Option<Board>) -> Game {
        Game {
            history: self.history.reset(initial_board),
            initial_turn: self.initial_turn,
            komi: self.komi,
            captured_by_black: 0,
            captured_by_white: 0,
        }
    }
}

/// Capture deltas as (by-black, by-white). Only the mover's opponent can
/// lose stones in a single placement; the updater upholds that, so exactly
/// one side of the pair can be non-zero.
fn captured_delta(old_board: &Board, new_board: &Board, turn: Stone) -> (usize, usize) {
    match turn {
        Stone::Black => (
            old_board.count_stones(Stone::White) - new_board.count_stones(Stone::White),
            0,
        ),
        Stone::White => (
            0,
            old_board.count_stones(Stone::Black) - new_board.count_stones(Stone::Black),
        ),
        Stone::Empty => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::ascii_to_board;
    use crate::rules::RuleBasedMoveProcessor;

    fn game_on(text: &str) -> Game {
        Game::new(SequenceHistory::new(ascii_to_board(text).unwrap()))
    }

    #[test]
    fn test_new_game_defaults() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");

        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.current_move(), None);
        assert_eq!(game.komi(), DEFAULT_KOMI);
        assert_eq!(game.captured_by_black(), 0);
        assert_eq!(game.captured_by_white(), 0);
        assert_eq!(game.dimension(), 5);
    }

    #[test]
    fn test_play_move_places_and_advances_turn() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");
        let processor = RuleBasedMoveProcessor::standard();

        let played = game
            .play_move(Coordinate::new(2, 0), &processor)
            .unwrap()
            .expect("legal move");

        assert_eq!(played.current_turn(), Stone::White);
        assert_eq!(
            played.current_move(),
            Some(&Move::place(Coordinate::new(2, 0), Stone::Black))
        );
        assert_eq!(
            played.current_board(),
            &game
                .current_board()
                .with_stone(Coordinate::new(2, 0), Stone::Black)
        );
        // The original game is untouched.
        assert_eq!(game.current_move(), None);
    }

    #[test]
    fn test_play_move_out_of_bounds_fails() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");
        let processor = RuleBasedMoveProcessor::standard();

        assert!(matches!(
            game.play_move(Coordinate::new(5, 0), &processor),
            Err(RuleError::OutOfBounds { .. })
        ));
        assert!(matches!(
            game.play_move(Coordinate::new(0, 5), &processor),
            Err(RuleError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_play_move_occupied_returns_none() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");
        let processor = RuleBasedMoveProcessor::standard();

        assert_eq!(game.play_move(Coordinate::new(0, 0), &processor).unwrap(), None);
    }

    #[test]
    fn test_play_move_updates_captured_stones() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");
        let processor = RuleBasedMoveProcessor::standard();

        // Black at (2, 2) takes the last shared liberty of three white
        // chains, eight stones in all.
        let played = game
            .play_move(Coordinate::new(2, 2), &processor)
            .unwrap()
            .expect("capturing move is legal");

        assert_eq!(played.captured_by_black(), 8);
        assert_eq!(played.captured_by_white(), 0);
    }

    #[test]
    fn test_pass_turn_advances_without_placing() {
        let game = game_on("+++++\n+++++\n+++++\n+++++\n+++++");

        let passed = game.pass_turn();
        assert_eq!(passed.current_turn(), Stone::White);
        assert_eq!(passed.current_board(), game.current_board());
        assert_eq!(passed.current_move(), Some(&Move::pass(Stone::Black)));

        let passed_again = passed.pass_turn();
        assert_eq!(passed_again.current_turn(), Stone::Black);
        assert_eq!(passed_again.move_history().len(), 2);
    }

    #[test]
    fn test_reset_clears_captures_with_history() {
        let game = game_on("xoxx+\nxooxx\n+x+oo\nxooxx\nxoxx+");
        let processor = RuleBasedMoveProcessor::standard();
        let played = game
            .play_move(Coordinate::new(2, 2), &processor)
            .unwrap()
            .unwrap();
        assert_eq!(played.captured_by_black(), 8);

        let reset = played.reset(None);
        assert_eq!(reset.captured_by_black(), 0);
        assert_eq!(reset.current_board(), game.initial_board());
        assert_eq!(reset.current_move(), None);
    }

    #[test]
    fn test_game_serializes_as_plain_data() {
        let game = game_on("x+\n+o");
        let json = serde_json::to_string(&game).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
    }
}
