//! Pacing and randomness settings shared by the game sessions.

use std::ops::RangeInclusive;
use std::time::Duration;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_THINK_DELAY_MS: RangeInclusive<u64> = 500..=800;
const DEFAULT_COMPLETION_DELAY: Duration = Duration::from_millis(1500);

/// Random source owned by each session.
pub type GameRng = ChaCha8Rng;

/// Seeded when a seed is given, from OS entropy otherwise.
pub fn game_rng(seed: Option<u64>) -> GameRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// How long the opponent appears to think and how long a finished game
/// stays on screen before the host is told about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingConfig {
    pub think_delay_ms: RangeInclusive<u64>,
    pub completion_delay: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: DEFAULT_THINK_DELAY_MS,
            completion_delay: DEFAULT_COMPLETION_DELAY,
        }
    }
}

impl PacingConfig {
    /// No delays at all, for tests and scripted play.
    pub fn instant() -> Self {
        Self {
            think_delay_ms: 0..=0,
            completion_delay: Duration::ZERO,
        }
    }

    pub fn think_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.think_delay_ms.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_millis(rng.gen_range(self.think_delay_ms.clone()))
    }
}
