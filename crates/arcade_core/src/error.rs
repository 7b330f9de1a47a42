//! Errors raised by the board rules.

use crate::piece::Color;
use crate::position::Position;

/// Rejected board operations.
///
/// Hosts usually treat these as "the click had no effect": the board or
/// session that raised them is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// No piece stands on the source square
    #[error("no piece at {0}")]
    EmptySquare(Position),

    /// The destination is not reachable by the piece on the source square
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// The piece belongs to the side that is not on move
    #[error("piece at {0} does not belong to the side to move")]
    WrongSide(Position),

    /// Tic-tac-toe cell already holds a mark
    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: u8, col: u8 },

    /// Tic-tac-toe cell outside the 3x3 grid
    #[error("cell ({row}, {col}) is off the grid")]
    OffGrid { row: u8, col: u8 },

    /// A chess position must hold exactly one king per side
    #[error("{color:?} has {count} kings, expected exactly one")]
    KingCount { color: Color, count: usize },
}

/// Result type alias for rule operations
pub type RulesResult<T> = Result<T, RulesError>;
