use arcade_core::{Board, piece::{PieceType, Color}};

// Material values used by the mini-game opponent
const PAWN_VALUE: i32 = 10;
const KNIGHT_VALUE: i32 = 30;
const BISHOP_VALUE: i32 = 30;
const ROOK_VALUE: i32 = 50;
const QUEEN_VALUE: i32 = 90;
const KING_VALUE: i32 = 900;   // Losing the king ends the game

/// Material balance from the point of view of `maximizing`.
///
/// Pieces of `maximizing` count positive, everything else negative. The
/// result depends on the pieces alone, not on whose turn it is.
pub fn evaluate_position(board: &Board, maximizing: Color) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| {
            let value = piece_value(piece.piece_type);
            if piece.color == maximizing { value } else { -value }
        })
        .sum()
}

/// Returns the base material value of a piece
pub fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}
