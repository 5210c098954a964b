pub mod board;
mod perft;
pub mod zobrist;

pub use board::{
    Color, Move, MoveStatus, Piece, PieceType, Position, PositionBuilder, RuleConfig, Square,
    StaticTables, WxfCode,
};
pub use zobrist::ZobristKey;
