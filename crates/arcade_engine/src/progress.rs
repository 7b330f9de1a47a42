//! Player experience with optimistic local updates.
//!
//! XP shows up locally as soon as it is earned. Each local change is kept
//! as a patch until the store confirms it; a failed write applies the
//! inverse patch so the displayed totals never drift from the store.

use std::collections::HashMap;
use serde::Serialize;
use crate::error::{EngineResult, StoreError};

const XP_PER_LEVEL: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Profile {
    pub xp: u64,
    pub games_played: u32,
}

impl Profile {
    pub fn level(&self) -> u32 {
        u32::try_from(self.xp / XP_PER_LEVEL).unwrap_or(u32::MAX - 1) + 1
    }

    fn add(&mut self, patch: &Patch) {
        self.xp += patch.xp;
        self.games_played += patch.games;
    }

    fn subtract(&mut self, patch: &Patch) {
        self.xp = self.xp.saturating_sub(patch.xp);
        self.games_played = self.games_played.saturating_sub(patch.games);
    }
}

/// Backend holding user profiles.
pub trait ProfileStore {
    fn load(&self, user: &str) -> Result<Profile, StoreError>;

    /// Atomically add `xp` and one played game; returns the stored profile.
    fn record_game(&mut self, user: &str, xp: u32) -> Result<Profile, StoreError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatchId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Patch {
    id: PatchId,
    xp: u64,
    games: u32,
}

#[derive(Debug, Clone)]
pub struct XpLedger {
    user: String,
    local: Profile,
    pending: Vec<Patch>,
    next_id: u64,
}

impl XpLedger {
    pub fn new(user: impl Into<String>, profile: Profile) -> Self {
        Self { user: user.into(), local: profile, pending: Vec::new(), next_id: 0 }
    }

    pub fn load<S: ProfileStore>(store: &S, user: impl Into<String>) -> EngineResult<Self> {
        let user = user.into();
        let profile = store.load(&user)?;
        Ok(Self::new(user, profile))
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// What the player sees, pending writes included.
    pub fn profile(&self) -> Profile {
        self.local
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Show a finished game locally before the store has it.
    pub fn apply(&mut self, xp: u32) -> PatchId {
        let patch = Patch { id: PatchId(self.next_id), xp: xp as u64, games: 1 };
        self.next_id += 1;
        self.local.add(&patch);
        self.pending.push(patch);
        patch.id
    }

    /// The store accepted the write; adopt its totals plus whatever is
    /// still in flight.
    pub fn confirm(&mut self, id: PatchId, stored: Profile) {
        self.pending.retain(|p| p.id != id);
        let mut local = stored;
        for patch in &self.pending {
            local.add(patch);
        }
        self.local = local;
    }

    /// The store rejected the write; undo it locally. Unknown ids are ignored.
    pub fn rollback(&mut self, id: PatchId) {
        if let Some(idx) = self.pending.iter().position(|p| p.id == id) {
            let patch = self.pending.remove(idx);
            self.local.subtract(&patch);
        }
    }

    /// Record a finished game: optimistic local update, then the store
    /// write, rolled back if the write fails.
    pub fn award<S: ProfileStore>(&mut self, store: &mut S, xp: u32) -> EngineResult<Profile> {
        let id = self.apply(xp);
        match store.record_game(&self.user, xp) {
            Ok(stored) => {
                self.confirm(id, stored);
                log::info!("{} earned {} xp, now level {}", self.user, xp, self.local.level());
                Ok(self.local)
            }
            Err(err) => {
                log::warn!("xp write for {} failed, rolling back: {}", self.user, err);
                self.rollback(id);
                Err(err.into())
            }
        }
    }
}

/// In-process profile store with injectable write failures.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: HashMap<String, Profile>,
    failing_writes: u32,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: impl Into<String>, profile: Profile) {
        self.profiles.insert(user.into(), profile);
    }

    /// Fail the next `count` writes.
    pub fn fail_next_writes(&mut self, count: u32) {
        self.failing_writes = count;
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self, user: &str) -> Result<Profile, StoreError> {
        self.profiles.get(user).copied().ok_or_else(|| StoreError::UnknownUser(user.to_string()))
    }

    fn record_game(&mut self, user: &str, xp: u32) -> Result<Profile, StoreError> {
        if self.failing_writes > 0 {
            self.failing_writes -= 1;
            return Err(StoreError::Unavailable("write rejected".to_string()));
        }
        let profile = self
            .profiles
            .get_mut(user)
            .ok_or_else(|| StoreError::UnknownUser(user.to_string()))?;
        profile.xp += xp as u64;
        profile.games_played += 1;
        Ok(*profile)
    }
}
