//! Error types for the game engine.

use arcade_core::RulesError;

/// Failure reported by an external store (profile or catalog backend).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// Errors that can occur while driving a game session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Player input rejected by the board rules
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// Input arrived after the session reached a terminal state
    #[error("the game is already over")]
    GameOver,

    /// Input arrived while the other side was on move
    #[error("it is not {0}'s turn")]
    NotYourTurn(&'static str),

    /// A new round was requested before the current one was decided
    #[error("the current round is still being played")]
    RoundInProgress,

    /// An AI reply scheduled before a restart was resolved afterwards
    #[error("stale AI reply from epoch {scheduled}, session is at {current}")]
    StaleReply { scheduled: u64, current: u64 },

    /// A backend write failed and the optimistic update was rolled back
    #[error("backend write failed: {0}")]
    Backend(#[from] StoreError),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
