//! Final score and experience for finished sessions.

use serde::Serialize;

// Chess
const WIN_BASE: i64 = 1000;
const WIN_FLOOR: i64 = 300;
const LOSS_FLOOR: i64 = 50;
const DRAW_FLOOR: i64 = 100;
const PAR_MOVES: i64 = 80;
const MOVE_BONUS_PER_MOVE: i64 = 10;
const CAPTURE_BONUS: i64 = 15;
const SECONDS_PER_PENALTY_POINT: u64 = 10;
const WIN_XP_DIVISOR: u32 = 8;
const LOSS_XP_DIVISOR: u32 = 15;
const DRAW_XP_DIVISOR: u32 = 12;

// Tic-tac-toe
const ROUND_WIN_POINTS: u32 = 100;
const ROUND_DRAW_POINTS: u32 = 30;
const ROUND_LOSS_POINTS: u32 = 0;
const SESSION_WIN_BONUS: u32 = 50;
const TICTACTOE_XP_DIVISOR: u32 = 10;

/// What the host receives once a session is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameCompletion {
    pub score: u32,
    pub xp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChessOutcome {
    /// The AI's king was captured
    Won,
    /// The player's king was captured
    Lost,
    /// The side to move had no move at all
    Drawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChessStats {
    pub total_moves: u32,
    pub player_captures: u32,
    pub elapsed_secs: u64,
}

pub fn chess_completion(outcome: ChessOutcome, stats: ChessStats) -> GameCompletion {
    let capture_bonus = stats.player_captures as i64 * CAPTURE_BONUS;
    let time_penalty = (stats.elapsed_secs / SECONDS_PER_PENALTY_POINT) as i64;

    let (score, divisor) = match outcome {
        ChessOutcome::Won => {
            let move_bonus = (PAR_MOVES - stats.total_moves as i64).max(0) * MOVE_BONUS_PER_MOVE;
            let raw = WIN_BASE + move_bonus + capture_bonus - time_penalty;
            (raw.max(WIN_FLOOR), WIN_XP_DIVISOR)
        }
        ChessOutcome::Lost => ((capture_bonus - time_penalty).max(LOSS_FLOOR), LOSS_XP_DIVISOR),
        ChessOutcome::Drawn => ((capture_bonus - time_penalty).max(DRAW_FLOOR), DRAW_XP_DIVISOR),
    };

    let score = u32::try_from(score).unwrap_or(u32::MAX);
    GameCompletion { score, xp: score / divisor }
}

/// How a single tic-tac-toe round ended, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundResult {
    PlayerWin,
    Draw,
    ComputerWin,
}

pub fn round_points(result: RoundResult) -> u32 {
    match result {
        RoundResult::PlayerWin => ROUND_WIN_POINTS,
        RoundResult::Draw => ROUND_DRAW_POINTS,
        RoundResult::ComputerWin => ROUND_LOSS_POINTS,
    }
}

/// Round points plus the per-win session bonus.
pub fn tictactoe_completion(round_total: u32, wins: u32) -> GameCompletion {
    let score = round_total + wins * SESSION_WIN_BONUS;
    GameCompletion { score, xp: score / TICTACTOE_XP_DIVISOR }
}
