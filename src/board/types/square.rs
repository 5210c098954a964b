//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use crate::board::error::SquareError;
use crate::board::tables::geometry;

/// Topmost playable rank (black's back rank).
pub const RANK_TOP: u8 = 3;
/// Bottom playable rank (red's back rank).
pub const RANK_BOTTOM: u8 = 12;
/// Leftmost playable file as seen by red.
pub const FILE_LEFT: u8 = 3;
/// The file both generals start on.
pub const FILE_CENTER: u8 = 7;
/// Rightmost playable file as seen by red.
pub const FILE_RIGHT: u8 = 11;

/// A square on the padded 16x16 board.
///
/// The low nibble holds the file and the high nibble the rank, so the playable
/// 9x10 board spans files 3..=11 and ranks 3..=12. Square 0 is never on the
/// board and is used as "no square".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    pub const NONE: Square = Square(0);

    #[inline]
    #[must_use]
    pub const fn from_coords(file_x: u8, rank_y: u8) -> Self {
        Square(file_x + (rank_y << 4))
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn file_x(self) -> u8 {
        self.0 & 15
    }

    #[inline]
    #[must_use]
    pub const fn rank_y(self) -> u8 {
        self.0 >> 4
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub fn in_board(self) -> bool {
        geometry::IN_BOARD[self.index()]
    }

    /// Inside either palace.
    #[inline]
    #[must_use]
    pub fn in_fort(self) -> bool {
        geometry::IN_FORT[self.index()]
    }

    /// On a back rank where an advisor or bishop may turn into a pawn.
    #[inline]
    #[must_use]
    pub fn can_promote(self) -> bool {
        geometry::CAN_PROMOTE[self.index()]
    }

    /// Point reflection through the board centre.
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        Square(254 - self.0)
    }

    /// Left-right reflection.
    #[inline]
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Square::from_coords(14 - self.file_x(), self.rank_y())
    }

    /// One rank towards the opponent of `color`.
    #[inline]
    #[must_use]
    pub const fn forward(self, color: Color) -> Self {
        Square(self.0.wrapping_sub(16).wrapping_add((color.index() as u8) << 5))
    }

    /// One rank towards `color`'s own back rank.
    #[inline]
    #[must_use]
    pub const fn backward(self, color: Color) -> Self {
        Square(self.0.wrapping_add(16).wrapping_sub((color.index() as u8) << 5))
    }

    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i16) -> Self {
        Square((self.0 as i16).wrapping_add(delta) as u8)
    }

    /// On `color`'s side of the river.
    #[inline]
    #[must_use]
    pub const fn home_half(self, color: Color) -> bool {
        (self.0 & 0x80) != ((color.index() as u8) << 7)
    }

    /// Across the river from `color`'s point of view.
    #[inline]
    #[must_use]
    pub const fn away_half(self, color: Color) -> bool {
        (self.0 & 0x80) == ((color.index() as u8) << 7)
    }

    #[inline]
    #[must_use]
    pub const fn same_half(self, other: Square) -> bool {
        ((self.0 ^ other.0) & 0x80) == 0
    }

    #[inline]
    #[must_use]
    pub const fn same_file(self, other: Square) -> bool {
        ((self.0 ^ other.0) & 0x0f) == 0
    }

    #[inline]
    #[must_use]
    pub const fn same_rank(self, other: Square) -> bool {
        ((self.0 ^ other.0) & 0xf0) == 0
    }

    /// Iterate over the 90 playable squares, top rank first.
    pub fn all() -> impl Iterator<Item = Square> {
        (RANK_TOP..=RANK_BOTTOM)
            .flat_map(|y| (FILE_LEFT..=FILE_RIGHT).map(move |x| Square::from_coords(x, y)))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({:#04x} {})", self.0, self)
    }
}

/// Prints UCCI coordinates (`a0`..`i9`), or `--` off the board.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_board() {
            return write!(f, "--");
        }
        let file = (b'a' + self.file_x() - FILE_LEFT) as char;
        let rank = (b'9' - (self.rank_y() - RANK_TOP)) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'i').contains(&file) {
            return Err(SquareError::FileOutOfBounds { file: file as char });
        }
        if !rank.is_ascii_digit() {
            return Err(SquareError::RankOutOfBounds { rank: rank as char });
        }
        Ok(Square::from_coords(
            file - b'a' + FILE_LEFT,
            b'9' - rank + RANK_TOP,
        ))
    }
}
