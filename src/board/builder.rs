//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use xiangqi_engine::board::{Color, PieceType, PositionBuilder, Square};
//!
//! let sq = |s: &str| s.parse::<Square>().unwrap();
//! let pos = PositionBuilder::new()
//!     .piece(sq("e0"), Color::Red, PieceType::King)
//!     .piece(sq("d9"), Color::Black, PieceType::King)
//!     .piece(sq("e6"), Color::Red, PieceType::Pawn)
//!     .side_to_move(Color::Black)
//!     .build();
//! assert_eq!(pos.to_fen(), "3k5/9/9/4P4/9/9/9/9/9/4K4 b");
//! ```

use std::sync::Arc;

use super::config::RuleConfig;
use super::fen::SlotCursor;
use super::state::Position;
use super::tables::StaticTables;
use super::types::{Color, PieceType, Square};

/// A fluent builder for constructing [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceType)>,
    side_to_move: Color,
    rules: RuleConfig,
    tables: Option<Arc<StaticTables>>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty builder: red to move, default rules.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::Red,
            rules: RuleConfig::default(),
            tables: None,
        }
    }

    /// Create a builder holding the standard opening position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (pc, sq) in start.pieces_of(color) {
                builder.pieces.push((sq, color, pc.kind()));
            }
        }
        builder
    }

    /// Place a piece, replacing whatever the builder had on that square.
    /// Squares off the playable board are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceType) -> Self {
        debug_assert!(square.in_board(), "{square:?} is off the board");
        self.pieces.retain(|(sq, _, _)| *sq != square);
        if square.in_board() {
            self.pieces.push((square, color, kind));
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Use a specific table set instead of the shared default.
    #[must_use]
    pub fn tables(mut self, tables: Arc<StaticTables>) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Build the position. Pieces are given slots in insertion order; a
    /// piece beyond its type's capacity (say a sixth pawn) is dropped.
    #[must_use]
    pub fn build(self) -> Position {
        let tables = self.tables.unwrap_or_else(StaticTables::shared);
        let mut pos = Position::with_tables(tables, self.rules);
        let mut cursor = SlotCursor::new();

        for (square, color, kind) in self.pieces {
            if let Some(piece) = cursor.claim(color, kind) {
                pos.add_piece(square, piece);
            }
        }
        if self.side_to_move == Color::Black {
            pos.change_side();
        }
        pos.set_irreversible();
        pos
    }
}
