//! Rank and file slide tables for rooks and cannons.
//!
//! For every origin on a line and every occupancy pattern of that line, the
//! tables store the farthest empty square and the first three blockers in
//! each direction. Index `[0]` looks towards higher coordinates
//! (right, down), `[1]` towards lower ones. Entries that find nothing hold the
//! origin itself.

use crate::board::types::{FILE_LEFT, RANK_TOP};

const RANK_LEN: usize = 9;
const FILE_LEN: usize = 10;
const RANK_PATTERNS: usize = 1 << RANK_LEN;
const FILE_PATTERNS: usize = 1 << FILE_LEN;

/// Line coordinates reachable in each direction. Rank entries hold a file
/// (`x`), file entries hold a shifted rank (`y << 4`), so OR-ing the other
/// coordinate back in yields a square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SlideMove {
    pub(crate) non_cap: [u8; 2],
    pub(crate) rook_cap: [u8; 2],
    pub(crate) cannon_cap: [u8; 2],
    /// Third blocker, behind two screens.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) super_cap: [u8; 2],
}

/// The same information as bitmasks over the line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SlideMask {
    pub(crate) non_cap: u16,
    pub(crate) rook_cap: u16,
    pub(crate) cannon_cap: u16,
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) super_cap: u16,
}

pub(crate) struct SlideTables {
    rank_moves: Vec<SlideMove>,
    rank_masks: Vec<SlideMask>,
    file_moves: Vec<SlideMove>,
    file_masks: Vec<SlideMask>,
}

impl SlideTables {
    pub(crate) fn new() -> Self {
        let mut tables = SlideTables {
            rank_moves: Vec::with_capacity(RANK_LEN * RANK_PATTERNS),
            rank_masks: Vec::with_capacity(RANK_LEN * RANK_PATTERNS),
            file_moves: Vec::with_capacity(FILE_LEN * FILE_PATTERNS),
            file_masks: Vec::with_capacity(FILE_LEN * FILE_PATTERNS),
        };

        for origin in 0..RANK_LEN {
            for occupancy in 0..RANK_PATTERNS {
                let (mv, mask) = scan_line(origin, RANK_LEN, occupancy as u16, |k| {
                    k as u8 + FILE_LEFT
                });
                debug_assert!(mv
                    .non_cap
                    .iter()
                    .chain(&mv.rook_cap)
                    .chain(&mv.cannon_cap)
                    .chain(&mv.super_cap)
                    .all(|&x| (3..=11).contains(&x)));
                tables.rank_moves.push(mv);
                tables.rank_masks.push(mask);
            }
        }

        for origin in 0..FILE_LEN {
            for occupancy in 0..FILE_PATTERNS {
                let (mv, mask) = scan_line(origin, FILE_LEN, occupancy as u16, |k| {
                    (k as u8 + RANK_TOP) << 4
                });
                debug_assert!(mv
                    .non_cap
                    .iter()
                    .chain(&mv.rook_cap)
                    .chain(&mv.cannon_cap)
                    .chain(&mv.super_cap)
                    .all(|&y| (3..=12).contains(&(y >> 4))));
                tables.file_moves.push(mv);
                tables.file_masks.push(mask);
            }
        }

        tables
    }

    /// Entry for a piece on file `x` given its rank's occupancy word.
    #[inline]
    pub(crate) fn rank_move(&self, x: u8, rank_bits: u16) -> &SlideMove {
        &self.rank_moves[rank_index(x, rank_bits)]
    }

    #[inline]
    pub(crate) fn rank_mask(&self, x: u8, rank_bits: u16) -> &SlideMask {
        &self.rank_masks[rank_index(x, rank_bits)]
    }

    /// Entry for a piece on rank `y` given its file's occupancy word.
    #[inline]
    pub(crate) fn file_move(&self, y: u8, file_bits: u16) -> &SlideMove {
        &self.file_moves[file_index(y, file_bits)]
    }

    #[inline]
    pub(crate) fn file_mask(&self, y: u8, file_bits: u16) -> &SlideMask {
        &self.file_masks[file_index(y, file_bits)]
    }
}

#[inline]
fn rank_index(x: u8, rank_bits: u16) -> usize {
    debug_assert!(((x - FILE_LEFT) as usize) < RANK_LEN);
    (x - FILE_LEFT) as usize * RANK_PATTERNS + rank_bits as usize
}

#[inline]
fn file_index(y: u8, file_bits: u16) -> usize {
    debug_assert!(((y - RANK_TOP) as usize) < FILE_LEN);
    (y - RANK_TOP) as usize * FILE_PATTERNS + file_bits as usize
}

fn scan_line(
    origin: usize,
    len: usize,
    occupancy: u16,
    coord: impl Fn(usize) -> u8,
) -> (SlideMove, SlideMask) {
    let start = coord(origin);
    let mut mv = SlideMove {
        non_cap: [start; 2],
        rook_cap: [start; 2],
        cannon_cap: [start; 2],
        super_cap: [start; 2],
    };
    let mut mask = SlideMask::default();

    scan_direction(0, origin + 1..len, occupancy, &coord, &mut mv, &mut mask);
    scan_direction(1, (0..origin).rev(), occupancy, &coord, &mut mv, &mut mask);
    (mv, mask)
}

fn scan_direction(
    dir: usize,
    path: impl Iterator<Item = usize>,
    occupancy: u16,
    coord: &impl Fn(usize) -> u8,
    mv: &mut SlideMove,
    mask: &mut SlideMask,
) {
    let mut blockers = 0;
    for k in path {
        let bit = 1u16 << k;
        if occupancy & bit == 0 {
            if blockers == 0 {
                mv.non_cap[dir] = coord(k);
                mask.non_cap |= bit;
            }
            continue;
        }
        match blockers {
            0 => {
                mv.rook_cap[dir] = coord(k);
                mask.rook_cap |= bit;
            }
            1 => {
                mv.cannon_cap[dir] = coord(k);
                mask.cannon_cap |= bit;
            }
            _ => {
                mv.super_cap[dir] = coord(k);
                mask.super_cap |= bit;
                return;
            }
        }
        blockers += 1;
    }
}
