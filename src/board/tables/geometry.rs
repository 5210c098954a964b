//! Fixed board geometry: per-square predicates and displacement tables.
//!
//! Displacement tables are indexed by `dst - src + 256`, so every difference
//! between two squares of the padded board has a slot.

use once_cell::sync::Lazy;

use crate::board::types::{Square, FILE_LEFT, FILE_RIGHT, RANK_BOTTOM, RANK_TOP};

pub(crate) const KING_DELTAS: [i16; 4] = [-0x10, -0x01, 0x01, 0x10];
pub(crate) const ADVISOR_DELTAS: [i16; 4] = [-0x11, -0x0f, 0x0f, 0x11];
pub(crate) const BISHOP_DELTAS: [i16; 4] = [-0x22, -0x1e, 0x1e, 0x22];
pub(crate) const KNIGHT_DELTAS: [i16; 8] = [-0x21, -0x1f, -0x12, -0x0e, 0x0e, 0x12, 0x1f, 0x21];

const SPAN_KING: u8 = 1;
const SPAN_ADVISOR: u8 = 2;
const SPAN_BISHOP: u8 = 3;

pub(crate) static IN_BOARD: Lazy<[bool; 256]> = Lazy::new(|| {
    let mut table = [false; 256];
    for (sq, slot) in table.iter_mut().enumerate() {
        let (x, y) = ((sq & 15) as u8, (sq >> 4) as u8);
        *slot = (RANK_TOP..=RANK_BOTTOM).contains(&y) && (FILE_LEFT..=FILE_RIGHT).contains(&x);
    }
    table
});

pub(crate) static IN_FORT: Lazy<[bool; 256]> = Lazy::new(|| {
    let mut table = [false; 256];
    for (sq, slot) in table.iter_mut().enumerate() {
        let (x, y) = ((sq & 15) as u8, (sq >> 4) as u8);
        let fort_rank = (3..=5).contains(&y) || (10..=12).contains(&y);
        *slot = fort_rank && (6..=8).contains(&x);
    }
    table
});

pub(crate) static CAN_PROMOTE: Lazy<[bool; 256]> = Lazy::new(|| {
    let mut table = [false; 256];
    for (sq, slot) in table.iter_mut().enumerate() {
        let (x, y) = ((sq & 15) as u8, (sq >> 4) as u8);
        *slot = (y == RANK_TOP || y == RANK_BOTTOM) && (FILE_LEFT..=FILE_RIGHT).contains(&x);
    }
    table
});

static LEGAL_SPAN: Lazy<[u8; 512]> = Lazy::new(|| {
    let mut table = [0u8; 512];
    for (deltas, span) in [
        (&KING_DELTAS, SPAN_KING),
        (&ADVISOR_DELTAS, SPAN_ADVISOR),
        (&BISHOP_DELTAS, SPAN_BISHOP),
    ] {
        for &d in deltas {
            table[(d + 256) as usize] = span;
        }
    }
    table
});

// Offset from the knight to the square that blocks the jump; 0 for non-jumps.
static KNIGHT_PIN: Lazy<[i8; 512]> = Lazy::new(|| {
    let mut table = [0i8; 512];
    for &d in &KNIGHT_DELTAS {
        let pin = match d {
            -0x21 | -0x1f => -0x10,
            -0x12 | 0x0e => -0x01,
            -0x0e | 0x12 => 0x01,
            _ => 0x10,
        };
        table[(d + 256) as usize] = pin;
    }
    table
});

/// Bit of a square within its rank's occupancy word.
pub(crate) static RANK_BIT: Lazy<[u16; 256]> = Lazy::new(|| {
    let mut table = [0u16; 256];
    for sq in Square::all() {
        table[sq.index()] = 1 << (sq.file_x() - FILE_LEFT);
    }
    table
});

/// Bit of a square within its file's occupancy word.
pub(crate) static FILE_BIT: Lazy<[u16; 256]> = Lazy::new(|| {
    let mut table = [0u16; 256];
    for sq in Square::all() {
        table[sq.index()] = 1 << (sq.rank_y() - RANK_TOP);
    }
    table
});

#[inline]
fn disp_index(src: Square, dst: Square) -> usize {
    dst.index() + 256 - src.index()
}

#[inline]
pub(crate) fn king_span(src: Square, dst: Square) -> bool {
    LEGAL_SPAN[disp_index(src, dst)] == SPAN_KING
}

#[inline]
pub(crate) fn advisor_span(src: Square, dst: Square) -> bool {
    LEGAL_SPAN[disp_index(src, dst)] == SPAN_ADVISOR
}

#[inline]
pub(crate) fn bishop_span(src: Square, dst: Square) -> bool {
    LEGAL_SPAN[disp_index(src, dst)] == SPAN_BISHOP
}

/// The bishop's eye between `src` and `dst`.
#[inline]
pub(crate) fn bishop_pin(src: Square, dst: Square) -> Square {
    Square(((src.0 as u16 + dst.0 as u16) >> 1) as u8)
}

/// The knight's leg for a jump from `src` to `dst`; equals `src` when the
/// displacement is not a knight jump.
#[inline]
pub(crate) fn knight_pin(src: Square, dst: Square) -> Square {
    src.offset(KNIGHT_PIN[disp_index(src, dst)] as i16)
}
