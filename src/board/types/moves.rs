//! Move types and move lists.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A move from one square to another.
///
/// A move whose source equals its destination is an advisor or bishop turning
/// into a pawn in place. `Move::NULL` (both squares 0) is the null move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    src: Square,
    dst: Square,
}

impl Move {
    pub const NULL: Move = Move {
        src: Square::NONE,
        dst: Square::NONE,
    };

    #[inline]
    #[must_use]
    pub const fn new(src: Square, dst: Square) -> Self {
        Move { src, dst }
    }

    /// In-place promotion of the piece standing on `sq`.
    #[inline]
    #[must_use]
    pub const fn promotion(sq: Square) -> Self {
        Move { src: sq, dst: sq }
    }

    #[inline]
    #[must_use]
    pub const fn src(self) -> Square {
        self.src
    }

    #[inline]
    #[must_use]
    pub const fn dst(self) -> Square {
        self.dst
    }

    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.src.0 == 0 && self.dst.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        !self.is_null() && self.src.0 == self.dst.0
    }

    /// Left-right mirror image of this move.
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Move::new(self.src.mirrored(), self.dst.mirrored())
    }

    /// Point reflection through the board centre.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        Move::new(self.src.flipped(), self.dst.flipped())
    }

    /// Source in the low byte, destination in the high byte.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.src.0 as u16 | (self.dst.0 as u16) << 8
    }

    #[inline]
    #[must_use]
    pub const fn from_u16(value: u16) -> Self {
        Move::new(Square(value as u8), Square((value >> 8) as u8))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Move(null)")
        } else if self.is_promotion() {
            write!(f, "Move({}=P)", self.src)
        } else {
            write!(f, "Move({}{})", self.src, self.dst)
        }
    }
}

/// UCCI coordinates, `0000` for the null move.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else {
            write!(f, "{}{}", self.src, self.dst)
        }
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move::NULL; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A capture together with its MVV/LVA score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: Move::NULL,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }

    /// Just the moves, generation order kept.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter().map(|sm| sm.mv)
    }

    /// Stable sort by score, highest first.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}
