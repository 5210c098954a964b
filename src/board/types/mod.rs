//! Core xiangqi types.
//!
//! - `Color`, `PieceType` and `Piece` - sides, piece kinds and slot-coded pieces
//! - `Square` - padded 16x16 board coordinate (u8)
//! - `Move`, `MoveList`, `ScoredMoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, ScoredMove, ScoredMoveList};
pub use piece::{Color, Piece, PieceType};
pub use square::{Square, FILE_CENTER, FILE_LEFT, FILE_RIGHT, RANK_BOTTOM, RANK_TOP};
