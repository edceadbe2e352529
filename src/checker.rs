//! Terminal-state detection as a first-match checker chain.
//!
//! Each checker answers "is this game over, and how?" or defers. The chain
//! asks them in order and stops at the first answer; no answer means the
//! game is still ongoing. A shared per-invocation context caches the
//! external analysis so a whole chain costs at most one provider call.

use log::debug;

use crate::analysis::{AnalysisError, GameAnalysis, GameAnalysisProvider};
use crate::game::Game;
use crate::model::{Board, Stone};
use crate::result::GameResult;

/// Winrate confidence that triggers a resignation result.
const RESIGNATION_THRESHOLD: f64 = 0.99;
/// Winrate distance from even that still counts as a draw.
const DRAW_WINRATE_BAND: f64 = 0.05;
/// Score lead that still counts as a draw.
const DRAW_SCORE_BAND: f64 = 0.3;

/// Per-invocation scratch state shared down a checker chain.
pub struct AnalysisContext<'a> {
    provider: &'a dyn GameAnalysisProvider,
    cached: Option<GameAnalysis>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(provider: &'a dyn GameAnalysisProvider) -> AnalysisContext<'a> {
        AnalysisContext {
            provider,
            cached: None,
        }
    }

    /// The analysis for `game`, fetched from the provider on first use and
    /// cached for the rest of the chain.
    pub fn analysis(&mut self, game: &Game) -> Result<GameAnalysis, AnalysisError> {
        if let Some(analysis) = self.cached {
            return Ok(analysis);
        }
        let analysis = self.provider.analyze(game)?;
        self.cached = Some(analysis);
        Ok(analysis)
    }
}

/// One terminal-state rule. `Ok(None)` defers to the next checker.
pub trait GameResultChecker {
    fn check(
        &self,
        game: &Game,
        context: &mut AnalysisContext<'_>,
    ) -> Result<Option<GameResult>, AnalysisError>;
}

/// Holds the game open until enough stones have been placed since the
/// initial board.
pub struct MinMovesChecker {
    min_moves: usize,
}

impl MinMovesChecker {
    pub fn new(min_moves: usize) -> MinMovesChecker {
        MinMovesChecker { min_moves }
    }
}

impl GameResultChecker for MinMovesChecker {
    fn check(
        &self,
        game: &Game,
        _context: &mut AnalysisContext<'_>,
    ) -> Result<Option<GameResult>, AnalysisError> {
        let placed = stones_on(game.current_board());
        let initial = stones_on(game.initial_board());

        // Captures can pull the count below the starting position; that
        // still reads as "not enough moves yet".
        if placed.saturating_sub(initial) < self.min_moves {
            return Ok(Some(GameResult::Ongoing));
        }
        Ok(None)
    }
}

fn stones_on(board: &Board) -> usize {
    board.count_stones(Stone::Black) + board.count_stones(Stone::White)
}

/// First player to reach the capture goal wins by resignation.
pub struct CapturedStoneChecker {
    goal: usize,
}

impl CapturedStoneChecker {
    pub fn new(goal: usize) -> CapturedStoneChecker {
        CapturedStoneChecker { goal }
    }
}

impl GameResultChecker for CapturedStoneChecker {
    fn check(
        &self,
        game: &Game,
        _context: &mut AnalysisContext<'_>,
    ) -> Result<Option<GameResult>, AnalysisError> {
        if game.captured_by_black() >= self.goal {
            return Ok(Some(GameResult::Resignation {
                winner: Stone::Black,
            }));
        }
        if game.captured_by_white() >= self.goal {
            return Ok(Some(GameResult::Resignation {
                winner: Stone::White,
            }));
        }
        Ok(None)
    }
}

/// Ends the game when the side that just moved reaches overwhelming
/// confidence.
pub struct ResignationChecker {
    threshold: f64,
}

impl ResignationChecker {
    pub fn new() -> ResignationChecker {
        ResignationChecker {
            threshold: RESIGNATION_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> ResignationChecker {
        ResignationChecker { threshold }
    }
}

impl Default for ResignationChecker {
    fn default() -> ResignationChecker {
        ResignationChecker::new()
    }
}

impl GameResultChecker for ResignationChecker {
    fn check(
        &self,
        game: &Game,
        context: &mut AnalysisContext<'_>,
    ) -> Result<Option<GameResult>, AnalysisError> {
        // Nobody has moved, so nobody can have just clinched the game.
        let Some(current_move) = game.current_move() else {
            return Ok(None);
        };

        let analysis = context.analysis(game)?;
        let result = match current_move.stone() {
            Stone::Black if analysis.winrate > self.threshold => Some(GameResult::Resignation {
                winner: Stone::Black,
            }),
            Stone::White if analysis.winrate < 1.0 - self.threshold => {
                Some(GameResult::Resignation {
                    winner: Stone::White,
                })
            }
            _ => None,
        };
        Ok(result)
    }
}

/// Scores a board the analysis provider says is finished.
pub struct FinishedBoardChecker;

impl GameResultChecker for FinishedBoardChecker {
    fn check(
        &self,
        game: &Game,
        context: &mut AnalysisContext<'_>,
    ) -> Result<Option<GameResult>, AnalysisError> {
        let analysis = context.analysis(game)?;
        if !analysis.is_game_finished {
            return Ok(None);
        }

        if is_draw(&analysis) {
            return Ok(Some(GameResult::Draw));
        }

        let winner = if analysis.winrate > 0.5 {
            Stone::Black
        } else {
            Stone::White
        };
        // Half-point komi rules out exact ties, so the narrowest possible
        // win is half a point; integral komi makes it a full point.
        let minimum_margin = if game.komi().fract() != 0.0 { 0.5 } else { 1.0 };
        let points = analysis.score_lead.abs().max(minimum_margin);

        Ok(Some(GameResult::PointsWin { winner, points }))
    }
}

fn is_draw(analysis: &GameAnalysis) -> bool {
    (analysis.winrate - 0.5).abs() < DRAW_WINRATE_BAND
        && analysis.score_lead.abs() < DRAW_SCORE_BAND
}

/// An ordered list of checkers; the first decisive answer wins and no
/// answer means `Ongoing`.
pub struct GameResultCheckerChain {
    checkers: Vec<Box<dyn GameResultChecker>>,
}

impl GameResultCheckerChain {
    pub fn new(checkers: Vec<Box<dyn GameResultChecker>>) -> GameResultCheckerChain {
        GameResultCheckerChain { checkers }
    }

    /// Runs the chain with a fresh context. Provider failures propagate
    /// untouched; retrying is the caller's decision.
    pub fn check(
        &self,
        game: &Game,
        provider: &dyn GameAnalysisProvider,
    ) -> Result<GameResult, AnalysisError> {
        let mut context = AnalysisContext::new(provider);
        for checker in &self.checkers {
            if let Some(result) = checker.check(game, &mut context)? {
                debug!("checker chain settled on {result:?}");
                return Ok(result);
            }
        }
        Ok(GameResult::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::ascii::ascii_to_board;
    use crate::history::SequenceHistory;
    use crate::model::{Coordinate, Move};
    use crate::rules::RuleBasedMoveProcessor;

    /// Canned analysis that counts how often it is consulted.
    struct FixedAnalysisProvider {
        analysis: GameAnalysis,
        calls: Cell<usize>,
    }

    impl FixedAnalysisProvider {
        fn new(winrate: f64, score_lead: f64, is_game_finished: bool) -> FixedAnalysisProvider {
            FixedAnalysisProvider {
                analysis: GameAnalysis {
                    winrate,
                    score_lead,
                    recommended_move: Move::pass(Stone::Black),
                    is_game_finished,
                },
                calls: Cell::new(0),
            }
        }
    }

    impl GameAnalysisProvider for FixedAnalysisProvider {
        fn analyze(&self, _game: &Game) -> Result<GameAnalysis, AnalysisError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.analysis)
        }
    }

    struct FailingProvider;

    impl GameAnalysisProvider for FailingProvider {
        fn analyze(&self, _game: &Game) -> Result<GameAnalysis, AnalysisError> {
            Err(AnalysisError::new("engine went away"))
        }
    }

    fn empty_game() -> Game {
        Game::new(SequenceHistory::new(Board::new(5)))
    }

    fn game_after_black_move() -> Game {
        let processor = RuleBasedMoveProcessor::standard();
        empty_game()
            .play_move(Coordinate::new(2, 2), &processor)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_min_moves_forces_ongoing() {
        let provider = FixedAnalysisProvider::new(1.0, 50.0, true);
        let chain = GameResultCheckerChain::new(vec![
            Box::new(MinMovesChecker::new(2)),
            Box::new(FinishedBoardChecker),
        ]);

        let result = chain.check(&game_after_black_move(), &provider).unwrap();
        assert_eq!(result, GameResult::Ongoing);
        // The gate answered before anything touched the provider.
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_min_moves_counts_from_initial_board() {
        let board = ascii_to_board("xx+++\n+++++\n+++++\n+++++\n+++++").unwrap();
        let game = Game::new(SequenceHistory::new(board));
        let provider = FixedAnalysisProvider::new(0.5, 0.0, false);
        let mut context = AnalysisContext::new(&provider);

        // Two pre-placed stones do not count toward the gate.
        let checker = MinMovesChecker::new(1);
        assert_eq!(
            checker.check(&game, &mut context).unwrap(),
            Some(GameResult::Ongoing)
        );
    }

    #[test]
    fn test_captured_stone_checker_goal() {
        let board = ascii_to_board("+oxxo\nooxx+\nooxxx\nooxx+\nooxxx").unwrap();
        let processor = RuleBasedMoveProcessor::standard();
        let game = Game::new(SequenceHistory::new(board))
            .play_move(Coordinate::new(0, 0), &processor)
            .unwrap()
            .unwrap();
        assert_eq!(game.captured_by_black(), 9);

        let provider = FixedAnalysisProvider::new(0.5, 0.0, false);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            CapturedStoneChecker::new(9).check(&game, &mut context).unwrap(),
            Some(GameResult::Resignation {
                winner: Stone::Black
            })
        );
        assert_eq!(
            CapturedStoneChecker::new(10).check(&game, &mut context).unwrap(),
            None
        );
    }

    #[test]
    fn test_resignation_checker_black_confidence() {
        let game = game_after_black_move();
        let provider = FixedAnalysisProvider::new(0.995, 10.0, false);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            ResignationChecker::new().check(&game, &mut context).unwrap(),
            Some(GameResult::Resignation {
                winner: Stone::Black
            })
        );
    }

    #[test]
    fn test_resignation_checker_needs_confidence_from_the_mover() {
        let game = game_after_black_move();
        // White is winning, but white did not just move.
        let provider = FixedAnalysisProvider::new(0.005, -10.0, false);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            ResignationChecker::new().check(&game, &mut context).unwrap(),
            None
        );
    }

    #[test]
    fn test_resignation_checker_defers_before_first_move() {
        let provider = FixedAnalysisProvider::new(1.0, 50.0, false);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            ResignationChecker::new()
                .check(&empty_game(), &mut context)
                .unwrap(),
            None
        );
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_finished_board_checker_points_win() {
        let game = game_after_black_move();
        let provider = FixedAnalysisProvider::new(0.9, 12.5, true);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            FinishedBoardChecker.check(&game, &mut context).unwrap(),
            Some(GameResult::PointsWin {
                winner: Stone::Black,
                points: 12.5
            })
        );
    }

    #[test]
    fn test_finished_board_checker_minimum_margin_tracks_komi() {
        let history = SequenceHistory::new(Board::new(5));

        // Half-point komi floors the margin at 0.5.
        let half = Game::with_settings(history.clone(), Stone::Black, 6.5);
        let provider = FixedAnalysisProvider::new(0.8, 0.1, true);
        let mut context = AnalysisContext::new(&provider);
        assert_eq!(
            FinishedBoardChecker.check(&half, &mut context).unwrap(),
            Some(GameResult::PointsWin {
                winner: Stone::Black,
                points: 0.5
            })
        );

        // Integral komi floors it at a full point.
        let whole = Game::with_settings(history, Stone::Black, 7.0);
        let provider = FixedAnalysisProvider::new(0.8, 0.1, true);
        let mut context = AnalysisContext::new(&provider);
        assert_eq!(
            FinishedBoardChecker.check(&whole, &mut context).unwrap(),
            Some(GameResult::PointsWin {
                winner: Stone::Black,
                points: 1.0
            })
        );
    }

    #[test]
    fn test_finished_board_checker_draw_band() {
        let game = empty_game();
        let provider = FixedAnalysisProvider::new(0.52, 0.1, true);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(
            FinishedBoardChecker.check(&game, &mut context).unwrap(),
            Some(GameResult::Draw)
        );
    }

    #[test]
    fn test_finished_board_checker_defers_when_unfinished() {
        let game = empty_game();
        let provider = FixedAnalysisProvider::new(0.9, 10.0, false);
        let mut context = AnalysisContext::new(&provider);

        assert_eq!(FinishedBoardChecker.check(&game, &mut context).unwrap(), None);
    }

    #[test]
    fn test_chain_invokes_provider_once() {
        let game = game_after_black_move();
        let provider = FixedAnalysisProvider::new(0.6, 2.0, false);
        let chain = GameResultCheckerChain::new(vec![
            Box::new(ResignationChecker::new()),
            Box::new(FinishedBoardChecker),
        ]);

        assert_eq!(chain.check(&game, &provider).unwrap(), GameResult::Ongoing);
        assert_eq!(provider.calls.get(), 1);
    }

    #[test]
    fn test_chain_first_decisive_checker_wins() {
        let board = ascii_to_board("+oxxo\nooxx+\nooxxx\nooxx+\nooxxx").unwrap();
        let processor = RuleBasedMoveProcessor::standard();
        let game = Game::new(SequenceHistory::new(board))
            .play_move(Coordinate::new(0, 0), &processor)
            .unwrap()
            .unwrap();

        let provider = FixedAnalysisProvider::new(0.999, 30.0, true);
        let chain = GameResultCheckerChain::new(vec![
            Box::new(CapturedStoneChecker::new(5)),
            Box::new(ResignationChecker::new()),
            Box::new(FinishedBoardChecker),
        ]);

        // The capture goal answers first even though later checkers would
        // also be decisive.
        assert_eq!(
            chain.check(&game, &provider).unwrap(),
            GameResult::Resignation {
                winner: Stone::Black
            }
        );
        assert_eq!(provider.calls.get(), 0);
    }

    #[test]
    fn test_chain_propagates_provider_failure() {
        let game = game_after_black_move();
        let chain = GameResultCheckerChain::new(vec![Box::new(ResignationChecker::new())]);

        assert!(chain.check(&game, &FailingProvider).is_err());
    }

    #[test]
    fn test_empty_chain_is_ongoing() {
        let chain = GameResultCheckerChain::new(Vec::new());
        let provider = FixedAnalysisProvider::new(0.5, 0.0, false);

        assert_eq!(
            chain.check(&empty_game(), &provider).unwrap(),
            GameResult::Ongoing
        );
    }
}
