//! External analysis and move-suggestion capabilities.
//!
//! The engine behind these traits lives with the host: an engine process, a
//! service call, whatever. It may be slow and it may fail; the core treats
//! it as opaque and never retries on its behalf.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::Game;
use crate::model::Move;

/// One engine evaluation of a game position.
///
/// `winrate` is Black's win probability in `[0, 1]`; `score_lead` is
/// positive when Black leads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameAnalysis {
    pub winrate: f64,
    pub score_lead: f64,
    pub recommended_move: Move,
    pub is_game_finished: bool,
}

/// Failure of an external analysis or move provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("analysis provider failed: {0}")]
pub struct AnalysisError(pub String);

impl AnalysisError {
    pub fn new(message: impl Into<String>) -> AnalysisError {
        AnalysisError(message.into())
    }
}

/// A position evaluator.
pub trait GameAnalysisProvider {
    fn analyze(&self, game: &Game) -> Result<GameAnalysis, AnalysisError>;
}

/// A move-suggestion capability, consumed when one side of a match is
/// automated.
pub trait MoveProvider {
    fn next_move(&self, game: &Game) -> Result<Move, AnalysisError>;
}
