//! The default list of mini-games.
//!
//! One table serves both seeding an empty store and standing in for the
//! store when it cannot be read.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use crate::error::{EngineResult, StoreError};
use crate::session::GameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: String,
    pub kind: GameKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
}

pub static DEFAULT_CATALOG: Lazy<Vec<GameInfo>> = Lazy::new(|| {
    vec![
        GameInfo {
            id: GameKind::TicTacToe.id().to_string(),
            kind: GameKind::TicTacToe,
            title: "Tic-Tac-Toe".to_string(),
            description: "Best the computer at three in a row. Every win earns a session bonus.".to_string(),
            category: "strategy".to_string(),
            difficulty: Difficulty::Easy,
        },
        GameInfo {
            id: GameKind::Chess.id().to_string(),
            kind: GameKind::Chess,
            title: "Chess".to_string(),
            description: "Capture the opposing king. Fewer moves and more captures score higher.".to_string(),
            category: "strategy".to_string(),
            difficulty: Difficulty::Hard,
        },
    ]
});

/// Backend collection holding the game list.
pub trait CatalogStore {
    fn list_games(&self) -> Result<Vec<GameInfo>, StoreError>;
    fn insert_game(&mut self, game: GameInfo) -> Result<(), StoreError>;
}

/// Write every default entry the store does not have yet. Returns how many
/// were written.
pub fn seed_catalog<S: CatalogStore>(store: &mut S) -> EngineResult<usize> {
    let existing = store.list_games()?;
    let mut written = 0;
    for game in DEFAULT_CATALOG.iter() {
        if existing.iter().any(|g| g.id == game.id) {
            continue;
        }
        store.insert_game(game.clone())?;
        written += 1;
    }
    log::info!("seeded {} catalog entries", written);
    Ok(written)
}

/// The stored game list, or the default catalog when the store is empty or
/// unreachable.
pub fn available_games<S: CatalogStore>(store: &S) -> Vec<GameInfo> {
    match store.list_games() {
        Ok(games) if !games.is_empty() => games,
        Ok(_) => DEFAULT_CATALOG.clone(),
        Err(err) => {
            log::warn!("catalog unavailable, showing defaults: {}", err);
            DEFAULT_CATALOG.clone()
        }
    }
}

/// In-process catalog store.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    games: Vec<GameInfo>,
    offline: bool,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail as if the backend were unreachable.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable("catalog store offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn list_games(&self) -> Result<Vec<GameInfo>, StoreError> {
        self.check_online()?;
        Ok(self.games.clone())
    }

    fn insert_game(&mut self, game: GameInfo) -> Result<(), StoreError> {
        self.check_online()?;
        self.games.push(game);
        Ok(())
    }
}
