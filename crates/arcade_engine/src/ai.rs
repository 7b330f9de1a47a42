use arcade_core::{Board, Move, piece::{Color, PieceType}, moves::all_moves};
use crate::evaluation::{evaluate_position, piece_value};
use rayon::prelude::*;

// Bonuses layered on top of the material evaluation
const CAPTURE_MULTIPLIER: i32 = 2;
const CENTER_BONUS: i32 = 5;
const PAWN_ADVANCE_BONUS: i32 = 3;

/// A candidate move together with the score the opponent gave it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub chess_move: Move,
    pub score: i32,
}

/// One-ply greedy opponent.
///
/// Every move of every piece it owns is played out on a copy of the board
/// and scored once; the opponent's reply is never considered.
#[derive(Debug, Clone, Copy)]
pub struct ChessAI {
    color: Color,
}

impl ChessAI {
    pub fn new(color: Color) -> Self {
        ChessAI { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn get_move(&self, board: &Board) -> Option<Move> {
        self.choose_move(board).map(|scored| scored.chess_move)
    }

    /// Highest scoring move, the earliest one on ties. `None` only when the
    /// side has no move at all.
    pub fn choose_move(&self, board: &Board) -> Option<ScoredMove> {
        let candidates = all_moves(board, self.color);
        log::debug!("{:?} has {} candidate moves", self.color, candidates.len());

        // Candidates are scored in parallel, the reduction stays in order
        let scores: Vec<i32> = candidates
            .par_iter()
            .map(|&mv| self.score_move(board, mv))
            .collect();

        let mut best: Option<ScoredMove> = None;
        for (chess_move, score) in candidates.into_iter().zip(scores) {
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredMove { chess_move, score });
            }
        }

        match best {
            Some(b) => log::debug!("{:?} picks {} (score {})", self.color, b.chess_move, b.score),
            None => log::debug!("{:?} has no legal move", self.color),
        }
        best
    }

    /// Evaluation of the resulting position plus capture, center and pawn
    /// advance bonuses.
    pub fn score_move(&self, board: &Board, mv: Move) -> i32 {
        let mover = match board.get_piece(mv.from) {
            Some(piece) => *piece,
            None => return i32::MIN,
        };

        let mut next = board.clone();
        let captured = match next.apply(mv) {
            Ok(captured) => captured,
            Err(_) => return i32::MIN,
        };

        let mut score = evaluate_position(&next, self.color);
        if let Some(captured) = captured {
            score += CAPTURE_MULTIPLIER * piece_value(captured.piece_type);
        }
        if mv.to.is_center() {
            score += CENTER_BONUS;
        }
        // Pawns only ever move forward
        if mover.piece_type == PieceType::Pawn {
            score += PAWN_ADVANCE_BONUS;
        }
        score
    }
}

impl Default for ChessAI {
    fn default() -> Self {
        ChessAI { color: Color::Black }
    }
}
