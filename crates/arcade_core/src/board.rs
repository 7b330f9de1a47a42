use std::collections::HashMap;
use std::fmt;
use crate::{Piece, Position, piece::{PieceType, Color}, Move, RulesError, RulesResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: HashMap<Position, Piece>,
    current_turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
            current_turn: Color::White,
        }
    }

    /// Build a board from eight rows of piece symbols, rank 8 first.
    ///
    /// Uppercase letters are White, lowercase Black, anything else is an
    /// empty square. Returns `None` when a row is not exactly 8 wide.
    pub fn from_rows(rows: [&str; 8], current_turn: Color) -> Option<Self> {
        let mut board = Self { pieces: HashMap::new(), current_turn };
        for (row_idx, row) in rows.iter().enumerate() {
            if row.chars().count() != 8 {
                return None;
            }
            let rank = 8 - row_idx as u8;
            for (file_idx, symbol) in row.chars().enumerate() {
                if let Some(piece) = piece_from_symbol(symbol) {
                    board.pieces.insert(Position { file: file_idx as u8 + 1, rank }, piece);
                }
            }
        }
        Some(board)
    }

    pub fn setup_initial_position(&mut self) {
        self.pieces.clear();
        self.current_turn = Color::White;

        // Setup pawns
        for file in 1..=8 {
            self.pieces.insert(Position { file, rank: 2 }, Piece::new(PieceType::Pawn, Color::White));
            self.pieces.insert(Position { file, rank: 7 }, Piece::new(PieceType::Pawn, Color::Black));
        }

        // Setup other pieces
        let piece_order = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, &piece_type) in (1..=8).zip(piece_order.iter()) {
            self.pieces.insert(Position { file, rank: 1 }, Piece::new(piece_type, Color::White));
            self.pieces.insert(Position { file, rank: 8 }, Piece::new(piece_type, Color::Black));
        }
    }

    pub fn get_piece(&self, pos: Position) -> Option<&Piece> {
        self.pieces.get(&pos)
    }

    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.pieces.insert(pos, piece)
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        self.pieces.remove(&pos)
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn set_current_turn(&mut self, color: Color) {
        self.current_turn = color;
    }

    /// Occupied squares in scan order (rank 8 to 1, file a to h).
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.pieces.get(&pos).map(|piece| (pos, *piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(pos, _)| pos)
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.king_position(color).is_some()
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.pieces
            .values()
            .filter(|piece| piece.piece_type == PieceType::King && piece.color == color)
            .count()
    }

    /// The same position with every piece's color swapped.
    pub fn color_swapped(&self) -> Self {
        Self {
            pieces: self.pieces.iter().map(|(pos, piece)| (*pos, piece.recolored())).collect(),
            current_turn: self.current_turn.opposite(),
        }
    }

    /// Play a move for the side to move after checking it against the
    /// movement rules. Returns the captured piece, if any.
    pub fn make_move(&mut self, chess_move: Move) -> RulesResult<Option<Piece>> {
        let piece = *self.pieces.get(&chess_move.from).ok_or(RulesError::EmptySquare(chess_move.from))?;

        if piece.color != self.current_turn {
            return Err(RulesError::WrongSide(chess_move.from));
        }

        if !chess_move.is_valid(self) {
            return Err(RulesError::IllegalMove { from: chess_move.from, to: chess_move.to });
        }

        self.apply(chess_move)
    }

    /// Move without checking the movement rules and hand the turn over.
    /// Whatever stands on the destination is captured, kings included.
    pub fn apply(&mut self, chess_move: Move) -> RulesResult<Option<Piece>> {
        let piece = self.pieces.remove(&chess_move.from).ok_or(RulesError::EmptySquare(chess_move.from))?;
        let captured = self.pieces.insert(chess_move.to, piece);
        if let Some(captured) = captured {
            log::trace!("{:?} on {} captured {:?}", piece, chess_move.to, captured);
        }
        self.current_turn = piece.color.opposite();
        Ok(captured)
    }
}

fn piece_from_symbol(symbol: char) -> Option<Piece> {
    let piece_type = match symbol.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };
    let color = if symbol.is_ascii_uppercase() { Color::White } else { Color::Black };
    Some(Piece::new(piece_type, color))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8u8).rev() {
            write!(f, "{} ", rank)?;
            for file in 1..=8u8 {
                let symbol = self.get_piece(Position { file, rank }).map_or('.', |p| p.symbol());
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn initial_position_has_one_king_per_side() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(board.king_position(Color::White), Some(pos("e1")));
        assert_eq!(board.king_position(Color::Black), Some(pos("e8")));
        assert_eq!(board.current_turn(), Color::White);
    }

    #[test]
    fn from_rows_matches_initial_position() {
        let board = Board::from_rows(
            [
                "rnbqkbnr",
                "pppppppp",
                "........",
                "........",
                "........",
                "........",
                "PPPPPPPP",
                "RNBQKBNR",
            ],
            Color::White,
        )
        .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn from_rows_rejects_short_rows() {
        assert!(Board::from_rows(["", "", "", "", "", "", "", ""], Color::White).is_none());
    }

    #[test]
    fn make_move_rejects_wrong_side() {
        let mut board = Board::new();
        let err = board.make_move(Move::new(pos("e7"), pos("e5"))).unwrap_err();
        assert_eq!(err, RulesError::WrongSide(pos("e7")));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn make_move_rejects_illegal_destination() {
        let mut board = Board::new();
        assert!(matches!(
            board.make_move(Move::new(pos("e2"), pos("e5"))),
            Err(RulesError::IllegalMove { .. })
        ));
    }

    #[test]
    fn make_move_from_empty_square() {
        let mut board = Board::new();
        assert_eq!(board.make_move(Move::new(pos("e4"), pos("e5"))), Err(RulesError::EmptySquare(pos("e4"))));
    }

    #[test]
    fn apply_captures_and_passes_turn() {
        let mut board = Board::from_rows(
            [
                "....k...",
                "........",
                "........",
                "...r....",
                "........",
                "........",
                "........",
                "...QK...",
            ],
            Color::White,
        )
        .unwrap();
        let captured = board.make_move(Move::new(pos("d1"), pos("d5"))).unwrap();
        assert_eq!(captured, Some(Piece::new(PieceType::Rook, Color::Black)));
        assert_eq!(board.current_turn(), Color::Black);
        assert_eq!(board.get_piece(pos("d5")), Some(&Piece::new(PieceType::Queen, Color::White)));
        assert!(board.get_piece(pos("d1")).is_none());
    }

    #[test]
    fn king_can_be_captured() {
        let mut board = Board::from_rows(
            [
                "....k...",
                "....R...",
                "........",
                "........",
                "........",
                "........",
                "........",
                "....K...",
            ],
            Color::White,
        )
        .unwrap();
        board.make_move(Move::new(pos("e7"), pos("e8"))).unwrap();
        assert!(!board.has_king(Color::Black));
    }

    #[test]
    fn king_count_per_side() {
        let board = Board::new();
        assert_eq!(board.king_count(Color::White), 1);
        assert_eq!(board.king_count(Color::Black), 1);
        assert_eq!(Board::empty().king_count(Color::White), 0);
    }

    #[test]
    fn color_swap_is_an_involution() {
        let board = Board::new();
        assert_eq!(board.color_swapped().color_swapped(), board);
        assert_eq!(
            board.color_swapped().get_piece(pos("e1")),
            Some(&Piece::new(PieceType::King, Color::Black))
        );
    }
}
