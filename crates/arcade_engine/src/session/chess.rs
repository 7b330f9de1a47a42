use std::time::Duration;
use arcade_core::{Board, Move, Piece, Position, RulesError, RulesResult, piece::Color, moves::{has_any_move, legal_destinations}};
use crate::ai::ChessAI;
use crate::config::{game_rng, GameRng, PacingConfig};
use crate::error::{EngineError, EngineResult};
use crate::scoring::{chess_completion, ChessOutcome, ChessStats, GameCompletion};
use super::{GameKind, MiniGame, PendingReply, Side};

const PLAYER_COLOR: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessStatus {
    Playing,
    Over(ChessOutcome),
}

/// Player (White) against the greedy opponent (Black).
///
/// The game ends when a king is captured, or as a draw when the side to
/// move has nothing to play.
#[derive(Debug, Clone)]
pub struct ChessSession {
    board: Board,
    start: Board,
    ai: ChessAI,
    turn: Side,
    total_moves: u32,
    player_captures: u32,
    ai_captures: u32,
    elapsed: Duration,
    status: ChessStatus,
    epoch: u64,
    rng: GameRng,
}

impl ChessSession {
    pub fn new(seed: Option<u64>) -> Self {
        Self::start(Board::new(), seed)
    }

    /// Start from an arbitrary position with the player to move.
    ///
    /// Each side must have exactly one king, otherwise the game could never
    /// end by capture (or would end on the wrong one).
    pub fn from_board(board: Board, seed: Option<u64>) -> RulesResult<Self> {
        for color in [Color::White, Color::Black] {
            let count = board.king_count(color);
            if count != 1 {
                return Err(RulesError::KingCount { color, count });
            }
        }
        Ok(Self::start(board, seed))
    }

    fn start(mut board: Board, seed: Option<u64>) -> Self {
        board.set_current_turn(PLAYER_COLOR);
        let mut session = Self {
            board: board.clone(),
            start: board,
            ai: ChessAI::new(PLAYER_COLOR.opposite()),
            turn: Side::Player,
            total_moves: 0,
            player_captures: 0,
            ai_captures: 0,
            elapsed: Duration::ZERO,
            status: ChessStatus::Playing,
            epoch: 0,
            rng: game_rng(seed),
        };
        session.check_stuck();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> ChessStatus {
        self.status
    }

    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    pub fn player_captures(&self) -> u32 {
        self.player_captures
    }

    pub fn ai_captures(&self) -> u32 {
        self.ai_captures
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn player_color(&self) -> Color {
        PLAYER_COLOR
    }

    pub fn stats(&self) -> ChessStats {
        ChessStats {
            total_moves: self.total_moves,
            player_captures: self.player_captures,
            elapsed_secs: self.elapsed.as_secs(),
        }
    }

    /// The game clock only runs while the game is being played.
    pub fn advance_clock(&mut self, delta: Duration) {
        if self.status == ChessStatus::Playing {
            self.elapsed += delta;
        }
    }

    /// Destinations to highlight for the piece on `from`. Empty unless it
    /// is the player's piece and the player is on move.
    pub fn selectable_destinations(&self, from: Position) -> Vec<Position> {
        let own_piece = matches!(self.board.get_piece(from), Some(p) if p.color == PLAYER_COLOR);
        if self.status != ChessStatus::Playing || self.turn != Side::Player || !own_piece {
            return Vec::new();
        }
        legal_destinations(&self.board, from)
    }

    pub fn player_move(&mut self, from: Position, to: Position) -> EngineResult<Option<Piece>> {
        self.expect_turn(Side::Player)?;

        let captured = self.board.make_move(Move::new(from, to))?;
        if captured.is_some() {
            self.player_captures += 1;
        }
        self.total_moves += 1;
        self.turn = Side::Computer;
        self.update_status();
        Ok(captured)
    }

    /// Let the opponent play. `Ok(None)` means it had no move, which ends
    /// the game as a draw.
    pub fn ai_move(&mut self) -> EngineResult<Option<Move>> {
        self.expect_turn(Side::Computer)?;

        let chosen = match self.ai.get_move(&self.board) {
            Some(mv) => mv,
            None => {
                log::info!("computer has no legal move, game drawn");
                self.status = ChessStatus::Over(ChessOutcome::Drawn);
                return Ok(None);
            }
        };

        let captured = self.board.apply(chosen)?;
        if captured.is_some() {
            self.ai_captures += 1;
        }
        self.total_moves += 1;
        self.turn = Side::Player;
        self.update_status();
        Ok(Some(chosen))
    }

    /// Ask for an opponent reply after a thinking delay. `None` unless the
    /// opponent is on move.
    pub fn schedule_ai_reply(&mut self, pacing: &PacingConfig) -> Option<PendingReply> {
        if self.status != ChessStatus::Playing || self.turn != Side::Computer {
            return None;
        }
        Some(PendingReply { epoch: self.epoch, delay: pacing.think_delay(&mut self.rng) })
    }

    pub fn resolve_ai_reply(&mut self, pending: PendingReply) -> EngineResult<Option<Move>> {
        if pending.epoch != self.epoch {
            return Err(EngineError::StaleReply { scheduled: pending.epoch, current: self.epoch });
        }
        self.ai_move()
    }

    fn expect_turn(&self, side: Side) -> EngineResult<()> {
        if self.status != ChessStatus::Playing {
            return Err(EngineError::GameOver);
        }
        if self.turn != side {
            return Err(EngineError::NotYourTurn(side.label()));
        }
        Ok(())
    }

    fn update_status(&mut self) {
        if !self.board.has_king(self.ai.color()) {
            self.status = ChessStatus::Over(ChessOutcome::Won);
        } else if !self.board.has_king(PLAYER_COLOR) {
            self.status = ChessStatus::Over(ChessOutcome::Lost);
        } else {
            self.check_stuck();
        }

        if let ChessStatus::Over(outcome) = self.status {
            log::info!("chess game over: {:?} after {} moves", outcome, self.total_moves);
        }
    }

    // The opponent's own stall is detected when it is asked to move
    fn check_stuck(&mut self) {
        if self.status == ChessStatus::Playing
            && self.turn == Side::Player
            && !has_any_move(&self.board, PLAYER_COLOR)
        {
            self.status = ChessStatus::Over(ChessOutcome::Drawn);
        }
    }
}

impl MiniGame for ChessSession {
    fn kind(&self) -> GameKind {
        GameKind::Chess
    }

    fn restart(&mut self) {
        self.board = self.start.clone();
        self.turn = Side::Player;
        self.total_moves = 0;
        self.player_captures = 0;
        self.ai_captures = 0;
        self.elapsed = Duration::ZERO;
        self.status = ChessStatus::Playing;
        self.epoch += 1;
        self.check_stuck();
        log::info!("chess session restarted (epoch {})", self.epoch);
    }

    fn is_over(&self) -> bool {
        self.status != ChessStatus::Playing
    }

    fn completion(&self) -> Option<GameCompletion> {
        match self.status {
            ChessStatus::Over(outcome) => Some(chess_completion(outcome, self.stats())),
            ChessStatus::Playing => None,
        }
    }

    fn epoch(&self) -> u64 {
        self.epoch
    }
}
