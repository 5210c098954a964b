//! Piece-square values used for the running material totals.
//!
//! Values are stored from red's point of view; black looks them up through
//! the point-reflected square.

use crate::board::types::{Color, PieceType, Square, FILE_CENTER, RANK_BOTTOM};

const BASE: [i32; 7] = [0, 20, 20, 88, 200, 96, 9];

pub(crate) struct PieceValues {
    red: Box<[[i32; 256]; 7]>,
}

impl PieceValues {
    pub(crate) fn new() -> Self {
        let mut red = Box::new([[0i32; 256]; 7]);
        for kind in PieceType::ALL {
            for sq in Square::all() {
                red[kind.index()][sq.index()] = BASE[kind.index()] + bonus(kind, sq);
            }
        }
        PieceValues { red }
    }

    #[inline]
    pub(crate) fn value(&self, color: Color, kind: PieceType, sq: Square) -> i32 {
        let sq = match color {
            Color::Red => sq,
            Color::Black => sq.flipped(),
        };
        self.red[kind.index()][sq.index()]
    }
}

fn bonus(kind: PieceType, sq: Square) -> i32 {
    // Ranks advanced from red's back rank, 0..=9.
    let advance = (RANK_BOTTOM - sq.rank_y()) as i32;
    let centre = 4 - (sq.file_x() as i32 - FILE_CENTER as i32).abs();
    match kind {
        PieceType::King => {
            if sq.file_x() == FILE_CENTER {
                3
            } else {
                0
            }
        }
        PieceType::Advisor | PieceType::Bishop => 0,
        PieceType::Knight => centre * 2 + advance.min(6),
        PieceType::Rook => centre + if sq.away_half(Color::Red) { 6 } else { 0 },
        PieceType::Cannon => centre + if advance <= 3 { 2 } else { 0 },
        PieceType::Pawn => {
            if sq.away_half(Color::Red) {
                10 + (advance - 5).min(3) * 4 + centre * 2
            } else {
                0
            }
        }
    }
}
