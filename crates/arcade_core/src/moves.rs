//! Destination generation for a single piece.
//!
//! Movement follows the plain piece rules only: no check detection, no
//! castling, no en passant and no promotion. A king may walk into attack
//! and may itself be captured.

use std::fmt;
use crate::{Position, Piece, piece::{PieceType, Color}, Board};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Whether the piece on `from` may move to `to` on this board.
    pub fn is_valid(&self, board: &Board) -> bool {
        legal_destinations(board, self.from).contains(&self.to)
    }

    /// Whether an enemy piece stands on the destination.
    pub fn is_capture(&self, board: &Board) -> bool {
        match (board.get_piece(self.from), board.get_piece(self.to)) {
            (Some(mover), Some(target)) => mover.color != target.color,
            _ => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Squares the piece on `from` can reach. An empty square yields nothing.
pub fn legal_destinations(board: &Board, from: Position) -> Vec<Position> {
    let piece = match board.get_piece(from) {
        Some(p) => *p,
        None => return Vec::new(),
    };

    match piece.piece_type {
        PieceType::Pawn => pawn_destinations(board, from, piece.color),
        PieceType::Knight => step_destinations(board, from, piece, &KNIGHT_JUMPS),
        PieceType::Bishop => ray_destinations(board, from, piece, &DIAGONAL),
        PieceType::Rook => ray_destinations(board, from, piece, &ORTHOGONAL),
        PieceType::Queen => ray_destinations(board, from, piece, &ALL_DIRECTIONS),
        PieceType::King => step_destinations(board, from, piece, &ALL_DIRECTIONS),
    }
}

pub fn moves_for(board: &Board, from: Position) -> Vec<Move> {
    legal_destinations(board, from)
        .into_iter()
        .map(|to| Move::new(from, to))
        .collect()
}

/// Every move available to `color`, pieces in scan order.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(pos, _)| moves_for(board, pos))
        .collect()
}

pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(pos, _)| !legal_destinations(board, pos).is_empty())
}

fn pawn_destinations(board: &Board, from: Position, color: Color) -> Vec<Position> {
    let mut destinations = Vec::new();
    let direction = color.forward();

    if let Some(one_step) = from.offset(0, direction) {
        if board.get_piece(one_step).is_none() {
            destinations.push(one_step);

            // Initial two-square move
            if from.rank == color.pawn_rank() {
                if let Some(two_step) = from.offset(0, 2 * direction) {
                    if board.get_piece(two_step).is_none() {
                        destinations.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(target) = from.offset(file_delta, direction) {
            if matches!(board.get_piece(target), Some(p) if p.color != color) {
                destinations.push(target);
            }
        }
    }

    destinations
}

fn step_destinations(board: &Board, from: Position, piece: Piece, offsets: &[(i8, i8)]) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| board.get_piece(to).map_or(true, |other| other.color != piece.color))
        .collect()
}

fn ray_destinations(board: &Board, from: Position, piece: Piece, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut destinations = Vec::new();

    for &(df, dr) in directions {
        let mut current = from;
        while let Some(next) = current.offset(df, dr) {
            match board.get_piece(next) {
                None => destinations.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        destinations.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }

    destinations
}
