//! Xiangqi board representation and game rules.
//!
//! A [`Position`] keeps a 16x16 padded board with per-rank and per-file
//! occupancy bits, an incremental Zobrist hash and the move history needed
//! for repetition rules.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::Position;
//!
//! let mut pos = Position::new();
//! let moves = pos.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//!
//! let mv = pos.chinese_to_move("炮二平五").unwrap();
//! assert!(pos.make_move(mv));
//! ```

mod attacks;
mod builder;
mod config;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
pub mod notation;
mod state;
mod status;
mod symmetry;
pub(crate) mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use config::{RuleConfig, MAX_REVERSIBLE_PLIES};
pub use error::{FenError, NotationError, SquareError};
pub use fen::START_FEN;
pub use history::{RepetitionStatus, BAN_VALUE, DRAW_VALUE, MATE_VALUE, WIN_VALUE};
pub use notation::{chinese_to_wxf, file_mirror, parse_ucci, to_ucci, wxf_to_chinese, WxfCode};
pub use state::{Check, HistoryEntry, Position, Threat, MAX_HISTORY};
pub use status::MoveStatus;
pub use symmetry::fen_mirror;
pub use tables::StaticTables;
pub use types::{
    Color, Move, MoveList, Piece, PieceType, ScoredMove, ScoredMoveList, Square, FILE_CENTER,
    FILE_LEFT, FILE_RIGHT, RANK_BOTTOM, RANK_TOP,
};
