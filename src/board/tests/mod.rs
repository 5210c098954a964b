//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `tables.rs` - Board geometry, slide and step tables, seeded keys
//! - `make_unmake.rs` - Make/undo correctness and incremental state
//! - `movegen.rs` - Generation order, pseudo-legality, checks and perft
//! - `repetition.rs` - Perpetual check/chase and draw rules
//! - `fen.rs` - FEN import and export
//! - `symmetry.rs` - Mirror, side exchange and board flip
//! - `notation.rs` - UCCI, WXF and Chinese move text
//! - `proptest.rs` - Property-based tests

mod fen;
mod movegen;
mod notation;

use crate::board::{Move, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Incremental hash, occupancy and material must match a full recount.
pub(super) fn assert_consistent(pos: &Position) {
    let (key, ranks, files, material) = pos.recomputed();
    assert_eq!(pos.zobrist, key, "zobrist drifted at {}", pos.to_fen());
    assert_eq!(pos.bit_ranks, ranks, "rank bits drifted at {}", pos.to_fen());
    assert_eq!(pos.bit_files, files, "file bits drifted at {}", pos.to_fen());
    assert_eq!(pos.material, material, "material drifted at {}", pos.to_fen());
    for (i, &sq) in pos.pieces.iter().enumerate().skip(16) {
        if !sq.is_none() {
            assert_eq!(pos.squares[sq.index()].index(), i);
        }
    }
}
