//! The contract between a mini-game and the page that opened it.

use std::time::Duration;
use crate::config::PacingConfig;
use crate::scoring::GameCompletion;
use crate::session::MiniGame;

/// Callbacks a host page provides to an open game.
pub trait GameHost {
    /// Called once per completed session. The host persists the XP and
    /// closes the game view.
    fn on_game_complete(&mut self, score: u32, xp_earned: u32);

    /// Called when the user dismisses the game.
    fn on_close(&mut self);
}

/// An open game together with the host that is waiting on it.
///
/// The completion is delivered at most once per session epoch, so a
/// restart re-arms it however it was triggered. Closing consumes the modal
/// and discards the session.
pub struct GameModal<G, H> {
    game: G,
    host: H,
    pacing: PacingConfig,
    reported_epoch: Option<u64>,
}

impl<G: MiniGame, H: GameHost> GameModal<G, H> {
    pub fn open(game: G, host: H, pacing: PacingConfig) -> Self {
        log::info!("opening {}", game.kind());
        Self { game, host, pacing, reported_epoch: None }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn pacing(&self) -> &PacingConfig {
        &self.pacing
    }

    /// How long the final result stays visible before `report_completion`
    /// should be called.
    pub fn completion_delay(&self) -> Duration {
        self.pacing.completion_delay
    }

    /// Whether a finished session is still waiting to be reported.
    pub fn completion_pending(&self) -> bool {
        !self.already_reported() && self.game.is_over()
    }

    /// Hand the final score to the host if the session is over and has not
    /// been reported yet.
    pub fn report_completion(&mut self) -> Option<GameCompletion> {
        if self.already_reported() {
            return None;
        }
        let completion = self.game.completion()?;
        self.reported_epoch = Some(self.game.epoch());
        log::info!("{} complete: score {}, xp {}", self.game.kind(), completion.score, completion.xp);
        self.host.on_game_complete(completion.score, completion.xp);
        Some(completion)
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    fn already_reported(&self) -> bool {
        self.reported_epoch == Some(self.game.epoch())
    }

    /// Dismiss the game and give the host back.
    pub fn close(mut self) -> H {
        log::info!("closing {}", self.game.kind());
        self.host.on_close();
        self.host
    }
}
