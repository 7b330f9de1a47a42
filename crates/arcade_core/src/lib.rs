// Board types and movement rules shared by the mini-games
pub mod board;
pub mod error;
pub mod piece;
pub mod position;
pub mod moves;
pub mod tictactoe;

// Re-export main types for convenience
pub use board::Board;
pub use error::{RulesError, RulesResult};
pub use piece::{Piece, Color, PieceType};
pub use position::Position;
pub use moves::Move;
pub use tictactoe::{Cell, Grid, GridOutcome, Mark};
