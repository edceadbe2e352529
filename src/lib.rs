//! Go (Baduk/Weiqi) rules engine and move-history core.
//!
//! This crate maintains board state, enforces placement legality (liberties,
//! captures, simple ko), resolves captures, and manages a branching-discard
//! undo/redo history, plus the pieces an interactive editor or automated
//! match builds on: a composable validation pipeline, a playable [`Game`]
//! aggregate with turn/komi/capture bookkeeping, and a result-checker chain
//! fed by an external analysis provider.
//!
//! Boards, histories, and games are persistent values: operations return new
//! instances and published state is safe to share. Rendering, widgets, and
//! host state layers live elsewhere and consume board snapshots and move
//! requests through the types here.

pub mod analysis;
pub mod ascii;
pub mod checker;
pub mod editor;
pub mod error;
pub mod game;
pub mod history;
pub mod master;
pub mod model;
pub mod result;
pub mod rules;

pub use analysis::{AnalysisError, GameAnalysis, GameAnalysisProvider, MoveProvider};
pub use error::{BoardParseError, RuleError};
pub use game::{Game, DEFAULT_KOMI};
pub use history::SequenceHistory;
pub use model::{Board, Coordinate, Move, Stone};
pub use result::{GameResult, PlayerOutcome};
pub use rules::{
    BasicMoveValidator, KoMoveValidator, MoveProcessor, MoveUpdater, MoveValidator,
    RuleBasedMoveProcessor, StandardMoveUpdater,
};
