use arcade_core::{Cell, Grid, GridOutcome, Mark};
use crate::config::{game_rng, GameRng, PacingConfig};
use crate::error::{EngineError, EngineResult};
use crate::scoring::{round_points, tictactoe_completion, GameCompletion, RoundResult};
use crate::tictactoe_ai::choose_cell;
use super::{GameKind, MiniGame, PendingReply, Side};

const PLAYER_MARK: Mark = Mark::X;
const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Finished(RoundResult),
}

/// A best-of-however-many tic-tac-toe session.
///
/// Rounds score 100 for a player win, 30 for a draw and nothing for a
/// loss. Finishing the session adds 50 per win.
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    grid: Grid,
    turn: Side,
    round: RoundStatus,
    round_total: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    rounds_played: u32,
    finished: Option<GameCompletion>,
    epoch: u64,
    rng: GameRng,
}

impl TicTacToeSession {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            grid: Grid::new(),
            turn: Side::Player,
            round: RoundStatus::Playing,
            round_total: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            rounds_played: 0,
            finished: None,
            epoch: 0,
            rng: game_rng(seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn round_status(&self) -> RoundStatus {
        self.round
    }

    /// Points from completed rounds, without the session bonus.
    pub fn score(&self) -> u32 {
        self.round_total
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn player_mark(&self) -> Mark {
        PLAYER_MARK
    }

    pub fn player_move(&mut self, cell: Cell) -> EngineResult<()> {
        self.expect_turn(Side::Player)?;
        self.grid.place(cell, PLAYER_MARK)?;
        self.turn = Side::Computer;
        self.settle_round();
        Ok(())
    }

    pub fn ai_move(&mut self) -> EngineResult<Option<Cell>> {
        self.expect_turn(Side::Computer)?;
        let cell = match choose_cell(&self.grid, COMPUTER_MARK, &mut self.rng) {
            Some(cell) => cell,
            None => return Ok(None),
        };
        self.grid.place(cell, COMPUTER_MARK)?;
        log::debug!("computer marks ({}, {})", cell.row, cell.col);
        self.turn = Side::Player;
        self.settle_round();
        Ok(Some(cell))
    }

    pub fn schedule_ai_reply(&mut self, pacing: &PacingConfig) -> Option<PendingReply> {
        if self.finished.is_some() || self.round != RoundStatus::Playing || self.turn != Side::Computer {
            return None;
        }
        Some(PendingReply { epoch: self.epoch, delay: pacing.think_delay(&mut self.rng) })
    }

    pub fn resolve_ai_reply(&mut self, pending: PendingReply) -> EngineResult<Option<Cell>> {
        if pending.epoch != self.epoch {
            return Err(EngineError::StaleReply { scheduled: pending.epoch, current: self.epoch });
        }
        self.ai_move()
    }

    /// Clear the grid for another round once the current one is decided.
    pub fn next_round(&mut self) -> EngineResult<()> {
        if self.finished.is_some() {
            return Err(EngineError::GameOver);
        }
        if self.round == RoundStatus::Playing {
            return Err(EngineError::RoundInProgress);
        }
        self.grid = Grid::new();
        self.turn = Side::Player;
        self.round = RoundStatus::Playing;
        Ok(())
    }

    /// End the session, folding in the per-win bonus. A round still in
    /// progress is abandoned. Calling it again returns the same result.
    pub fn finish(&mut self) -> GameCompletion {
        if let Some(done) = self.finished {
            return done;
        }
        let done = tictactoe_completion(self.round_total, self.wins);
        log::info!(
            "tic-tac-toe session finished: {} wins, {} draws, {} losses, score {}",
            self.wins, self.draws, self.losses, done.score
        );
        self.finished = Some(done);
        done
    }

    fn expect_turn(&self, side: Side) -> EngineResult<()> {
        if self.finished.is_some() || self.round != RoundStatus::Playing {
            return Err(EngineError::GameOver);
        }
        if self.turn != side {
            return Err(EngineError::NotYourTurn(side.label()));
        }
        Ok(())
    }

    fn settle_round(&mut self) {
        let result = match self.grid.outcome() {
            None => return,
            Some(GridOutcome::Draw) => RoundResult::Draw,
            Some(GridOutcome::Won(mark)) if mark == PLAYER_MARK => RoundResult::PlayerWin,
            Some(GridOutcome::Won(_)) => RoundResult::ComputerWin,
        };

        match result {
            RoundResult::PlayerWin => self.wins += 1,
            RoundResult::Draw => self.draws += 1,
            RoundResult::ComputerWin => self.losses += 1,
        }
        self.round_total += round_points(result);
        self.rounds_played += 1;
        self.round = RoundStatus::Finished(result);
        log::info!("round {} ended: {:?}", self.rounds_played, result);
    }
}

impl MiniGame for TicTacToeSession {
    fn kind(&self) -> GameKind {
        GameKind::TicTacToe
    }

    fn restart(&mut self) {
        self.grid = Grid::new();
        self.turn = Side::Player;
        self.round = RoundStatus::Playing;
        self.round_total = 0;
        self.wins = 0;
        self.draws = 0;
        self.losses = 0;
        self.rounds_played = 0;
        self.finished = None;
        self.epoch += 1;
        log::info!("tic-tac-toe session restarted (epoch {})", self.epoch);
    }

    fn is_over(&self) -> bool {
        self.finished.is_some()
    }

    fn completion(&self) -> Option<GameCompletion> {
        self.finished
    }

    fn epoch(&self) -> u64 {
        self.epoch
    }
}
