//! Game sessions: the in-memory state a mini-game owns while it is open.
//!
//! A session is created when the game opens, mutated by player and
//! opponent moves, and dropped when the game closes. `restart` returns it to
//! its initial counters and invalidates any opponent reply still pending.

mod chess;
mod tictactoe;

pub use chess::{ChessSession, ChessStatus};
pub use tictactoe::{RoundStatus, TicTacToeSession};

use std::fmt;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::scoring::GameCompletion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    TicTacToe,
    Chess,
}

impl GameKind {
    pub fn id(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::Chess => "chess",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Who is on move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Side::Player => "the player",
            Side::Computer => "the computer",
        }
    }
}

/// An opponent reply waiting out its thinking delay.
///
/// Only honoured by the session that issued it, and only if the session
/// has not been restarted in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub epoch: u64,
    pub delay: Duration,
}

/// Behaviour shared by every mini-game session.
pub trait MiniGame {
    fn kind(&self) -> GameKind;

    /// Reset all counters to their initial values and start over.
    fn restart(&mut self);

    fn is_over(&self) -> bool;

    /// Final score and experience, once the session is over.
    fn completion(&self) -> Option<GameCompletion>;

    /// Bumped on every restart.
    fn epoch(&self) -> u64;
}
