//! Game outcomes.

use serde::{Deserialize, Serialize};

use crate::model::Stone;

/// The state of a game as judged by the result checkers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Draw,
    /// One side gave up (or was judged lost beyond doubt).
    Resignation { winner: Stone },
    /// A counted win by `points`.
    PointsWin { winner: Stone, points: f64 },
}

impl GameResult {
    pub fn winner(&self) -> Option<Stone> {
        match *self {
            GameResult::Resignation { winner } | GameResult::PointsWin { winner, .. } => {
                Some(winner)
            }
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(self, GameResult::Ongoing)
    }

    /// The result reduced to one player's point of view. A draw counts
    /// against the player; an ongoing game is neither.
    pub fn outcome_for(&self, player: Stone) -> PlayerOutcome {
        match self {
            GameResult::Ongoing => PlayerOutcome::Ongoing,
            GameResult::Draw => PlayerOutcome::Failure,
            _ if self.winner() == Some(player) => PlayerOutcome::Success,
            _ => PlayerOutcome::Failure,
        }
    }
}

/// A game result as seen by a designated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerOutcome {
    Success,
    Failure,
    Ongoing,
}

impl PlayerOutcome {
    pub fn is_success(self) -> bool {
        self == PlayerOutcome::Success
    }

    pub fn is_failure(self) -> bool {
        self == PlayerOutcome::Failure
    }

    pub fn is_ongoing(self) -> bool {
        self == PlayerOutcome::Ongoing
    }
}
