//! Automated match coordination.
//!
//! A [`GameMaster`] owns one game and an ordered list of result providers,
//! and is the single coordinator callers go through; games and boards stay
//! persistent values underneath it.

use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::error::RuleError;
use crate::game::Game;
use crate::model::{Coordinate, Stone};
use crate::result::GameResult;
use crate::rules::MoveProcessor;

/// A verdict source for a running game: capture goals, score targets, and
/// the like. `Ongoing` means "no opinion, ask the next provider".
pub trait GameResultProvider {
    fn provide_result(&self, game: &Game) -> Result<GameResult, AnalysisError>;
}

/// First player to reach the capture goal wins outright.
pub struct QuickCaptureResultProvider {
    goal: usize,
}

impl QuickCaptureResultProvider {
    pub fn new(goal: usize) -> QuickCaptureResultProvider {
        QuickCaptureResultProvider { goal }
    }
}

impl GameResultProvider for QuickCaptureResultProvider {
    fn provide_result(&self, game: &Game) -> Result<GameResult, AnalysisError> {
        if game.captured_by_black() >= self.goal {
            return Ok(GameResult::Resignation {
                winner: Stone::Black,
            });
        }
        if game.captured_by_white() >= self.goal {
            return Ok(GameResult::Resignation {
                winner: Stone::White,
            });
        }
        Ok(GameResult::Ongoing)
    }
}

/// Only the designated player's captures count toward the goal.
pub struct SelfCaptureResultProvider {
    player: Stone,
    goal: usize,
}

impl SelfCaptureResultProvider {
    /// `player` must be `Black` or `White`.
    pub fn new(player: Stone, goal: usize) -> SelfCaptureResultProvider {
        debug_assert!(!player.is_empty());
        SelfCaptureResultProvider { player, goal }
    }
}

impl GameResultProvider for SelfCaptureResultProvider {
    fn provide_result(&self, game: &Game) -> Result<GameResult, AnalysisError> {
        let captured = match self.player {
            Stone::Black => game.captured_by_black(),
            Stone::White => game.captured_by_white(),
            // An empty player never captures anything.
            Stone::Empty => return Ok(GameResult::Ongoing),
        };

        if captured >= self.goal {
            return Ok(GameResult::Resignation {
                winner: self.player,
            });
        }
        Ok(GameResult::Ongoing)
    }
}

/// A failure while coordinating a match: either the caller broke the move
/// contract or a result provider gave out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// What one coordinated move produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchStep {
    /// The move was game-illegal; the game did not change.
    Rejected,
    /// The move stood; the providers' verdict for the new position.
    Played { result: GameResult },
}

/// Drives one game against an ordered list of result providers.
pub struct GameMaster {
    game: Game,
    providers: Vec<Box<dyn GameResultProvider>>,
}

impl GameMaster {
    pub fn new(game: Game, providers: Vec<Box<dyn GameResultProvider>>) -> GameMaster {
        GameMaster { game, providers }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The coordinated player opens the game.
    pub fn player(&self) -> Stone {
        self.game.initial_turn()
    }

    /// Plays one move for the current turn and, if it stands, asks the
    /// providers for a verdict on the new position.
    pub fn play_move(
        &mut self,
        coordinate: Coordinate,
        processor: &dyn MoveProcessor,
    ) -> Result<MatchStep, MatchError> {
        let Some(game) = self.game.play_move(coordinate, processor)? else {
            return Ok(MatchStep::Rejected);
        };

        let result = self.check_result(&game)?;
        self.game = game;
        Ok(MatchStep::Played { result })
    }

    /// The first decisive provider wins; all `Ongoing` means play on.
    pub fn check_result(&self, game: &Game) -> Result<GameResult, AnalysisError> {
        for provider in &self.providers {
            let result = provider.provide_result(game)?;
            if !result.is_ongoing() {
                return Ok(result);
            }
        }
        Ok(GameResult::Ongoing)
    }
}
