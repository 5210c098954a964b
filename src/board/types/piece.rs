//! Piece, piece type and color types.

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Xiangqi piece types, in generation order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    King,
    Advisor,
    Bishop,
    Knight,
    Rook,
    Cannon,
    Pawn,
}

// Slot -> type for the sixteen pieces of one side.
const SLOT_TYPES: [PieceType; 16] = [
    PieceType::King,
    PieceType::Advisor,
    PieceType::Advisor,
    PieceType::Bishop,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Knight,
    PieceType::Rook,
    PieceType::Rook,
    PieceType::Cannon,
    PieceType::Cannon,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
];

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 7] = [
        PieceType::King,
        PieceType::Advisor,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Cannon,
        PieceType::Pawn,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<PieceType> {
        if idx < 7 {
            Some(PieceType::ALL[idx])
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_slot(slot: u8) -> PieceType {
        SLOT_TYPES[(slot & 15) as usize]
    }

    /// Slot range reserved for this type within one side's sixteen pieces.
    #[inline]
    #[must_use]
    pub const fn slots(self) -> Range<u8> {
        match self {
            PieceType::King => 0..1,
            PieceType::Advisor => 1..3,
            PieceType::Bishop => 3..5,
            PieceType::Knight => 5..7,
            PieceType::Rook => 7..9,
            PieceType::Cannon => 9..11,
            PieceType::Pawn => 11..16,
        }
    }

    /// Presence bits of this type's slots within one side's 16-bit half.
    #[inline]
    #[must_use]
    pub const fn slot_mask(self) -> u16 {
        let slots = self.slots();
        ((1u32 << slots.end) - (1u32 << slots.start)) as u16
    }

    /// Parse a FEN letter, either case. `E` and `H` are accepted for bishop and knight.
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'A' => Some(PieceType::Advisor),
            'B' | 'E' => Some(PieceType::Bishop),
            'N' | 'H' => Some(PieceType::Knight),
            'R' => Some(PieceType::Rook),
            'C' => Some(PieceType::Cannon),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }

    /// Uppercase FEN/WXF letter.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Advisor => 'A',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::Cannon => 'C',
            PieceType::Pawn => 'P',
        }
    }

    /// Coarse value used by capture ordering: K=5, R=4, N=C=3, P=2, A=B=1.
    #[inline]
    #[must_use]
    pub const fn simple_value(self) -> i32 {
        match self {
            PieceType::King => 5,
            PieceType::Advisor | PieceType::Bishop => 1,
            PieceType::Knight | PieceType::Cannon => 3,
            PieceType::Rook => 4,
            PieceType::Pawn => 2,
        }
    }

    /// Knights, rooks, cannons and pawns can still deliver mate.
    #[inline]
    #[must_use]
    pub const fn is_attacking(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Rook | PieceType::Cannon | PieceType::Pawn
        )
    }
}

/// The two sides. Red moves first and sits at the bottom of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Both colors in index order (Red=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::Red, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Bit shared by all piece codes of this color (16 or 32).
    #[inline]
    #[must_use]
    pub const fn tag(self) -> u8 {
        16 + ((self.index() as u8) << 4)
    }

    /// Scoring sign (+1 for Red, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece code: 0 for an empty square, 16..=31 for red, 32..=47 for black.
///
/// The low four bits are the slot (0 king, 1-2 advisors, 3-4 bishops, 5-6
/// knights, 7-8 rooks, 9-10 cannons, 11-15 pawns), which fixes the type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(pub u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    #[must_use]
    pub const fn new(color: Color, slot: u8) -> Self {
        Piece(color.tag() + slot)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        if self.0 < 32 {
            Color::Red
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn slot(self) -> u8 {
        self.0 & 15
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceType {
        PieceType::from_slot(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn belongs_to(self, color: Color) -> bool {
        self.0 & color.tag() != 0
    }

    /// Bit of this piece in the 32-bit presence mask.
    #[inline]
    #[must_use]
    pub(crate) const fn bit(self) -> u32 {
        1 << (self.0 - 16)
    }

    /// FEN letter, uppercase for red.
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind().to_char();
        match self.color() {
            Color::Red => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Piece(-)")
        } else {
            write!(f, "Piece({} {})", self.0, self.to_fen_char())
        }
    }
}
