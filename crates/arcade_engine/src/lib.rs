pub mod ai;
pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod host;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod tictactoe_ai;

pub use ai::{ChessAI, ScoredMove};
pub use catalog::{GameInfo, DEFAULT_CATALOG};
pub use config::{GameRng, PacingConfig};
pub use error::{EngineError, EngineResult, StoreError};
pub use evaluation::evaluate_position;
pub use host::{GameHost, GameModal};
pub use progress::{Profile, ProfileStore, XpLedger};
pub use scoring::{ChessOutcome, GameCompletion};
pub use session::{ChessSession, GameKind, MiniGame, TicTacToeSession};
