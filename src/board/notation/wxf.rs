//! WXF move codes such as `C2.5`, `N8+7` or `+P.4`.
//!
//! A code is four ASCII bytes:
//!
//! 1. piece letter, or a direction byte when the piece is named second
//! 2. file digit counted from the mover's right, or an ordinal
//!    (`+` front, `.` middle, `-` back, `a`..`e` for four or more)
//! 3. direction: `+` advance, `.` traverse, `-` retreat, `=` promote
//! 4. rank distance or destination file digit, `P` after `=`
//!
//! Files and ranks are read from the mover's side of the board, so decoding
//! and encoding both depend on the position.

use std::fmt;
use std::str::FromStr;

use super::fixed;
use crate::board::error::NotationError;
use crate::board::state::Position;
use crate::board::types::{Color, Move, PieceType, Square, FILE_RIGHT, RANK_TOP};

// Ordinal indices: `a`..`e` are 0..4, the three direction bytes follow.
const FRONT: usize = 5;
const BACK: usize = 7;
const ORDINAL_BYTES: [u8; 8] = *b"abcde+.-";

/// A four-byte WXF move code.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WxfCode(pub [u8; 4]);

impl WxfCode {
    #[inline]
    #[must_use]
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }

    #[must_use]
    pub fn to_wxf_string(self) -> String {
        self.0.iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for WxfCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wxf_string())
    }
}

impl fmt::Debug for WxfCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WxfCode({})", self.to_wxf_string())
    }
}

impl FromStr for WxfCode {
    type Err = NotationError;

    /// Accepts any four ASCII characters; the content is checked on decode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 4 {
            return Err(NotationError::InvalidLength { len });
        }
        let bytes: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| NotationError::InvalidLength { len: s.len() })?;
        Ok(WxfCode(bytes))
    }
}

/// The three movement directions, in the order `+`, `.`, `-`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Direction {
    Advance,
    Traverse,
    Retreat,
}

impl Direction {
    pub(super) fn from_byte(b: u8) -> Option<Direction> {
        match b {
            b'+' => Some(Direction::Advance),
            b'.' | b'=' => Some(Direction::Traverse),
            b'-' => Some(Direction::Retreat),
            _ => None,
        }
    }

    pub(super) const fn index(self) -> usize {
        self as usize
    }

    pub(super) const fn to_byte(self) -> u8 {
        match self {
            Direction::Advance => b'+',
            Direction::Traverse => b'.',
            Direction::Retreat => b'-',
        }
    }
}

/// Piece letter, or `1`..`7` for numeric-keypad entry.
pub(super) fn byte_to_piece(b: u8) -> Option<PieceType> {
    match b {
        b'1'..=b'7' => PieceType::from_index((b - b'1') as usize),
        _ if b.is_ascii_alphabetic() => PieceType::from_char(b as char),
        _ => None,
    }
}

/// `1`..`9` to 0..8.
pub(super) fn byte_to_digit(b: u8) -> Option<u8> {
    (b'1'..=b'9').contains(&b).then(|| b - b'1')
}

pub(super) const fn digit_to_byte(d: u8) -> u8 {
    b'1' + d
}

/// Ordinal index for the second byte, `None` when it is a file digit.
pub(super) fn byte_to_ordinal(b: u8) -> Option<usize> {
    match b {
        b'a'..=b'e' => Some((b - b'a') as usize),
        _ => Direction::from_byte(b).map(|d| d.index() + FRONT),
    }
}

pub(super) const fn ordinal_to_byte(ordinal: usize) -> u8 {
    ORDINAL_BYTES[ordinal]
}

/// Board coordinates seen from `side`: file 0 is that side's rightmost file
/// and rank 0 the far edge. Sorting by `(file, rank)` puts the front piece
/// of a file first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
struct FileSq {
    file: u8,
    rank: u8,
}

impl FileSq {
    fn new(sq: Square, side: Color) -> Self {
        let sq = match side {
            Color::Red => sq,
            Color::Black => sq.flipped(),
        };
        FileSq {
            file: FILE_RIGHT - sq.file_x(),
            rank: sq.rank_y() - RANK_TOP,
        }
    }

    fn to_square(self, side: Color) -> Square {
        let sq = Square::from_coords(FILE_RIGHT - self.file, self.rank + RANK_TOP);
        match side {
            Color::Red => sq,
            Color::Black => sq.flipped(),
        }
    }
}

/// Fold keypad digits and lowercase letters into the canonical form used by
/// the fixed advisor/bishop table.
fn normalise(mut code: [u8; 4]) -> [u8; 4] {
    code[0] = match code[0] {
        b'2' | b'a' => b'A',
        b'3' | b'b' | b'E' | b'e' => b'B',
        other => other,
    };
    if code[3] == b'p' {
        code[3] = b'P';
    }
    code
}

impl Position {
    /// Pieces of `kind` belonging to the side to move.
    fn file_squares(&self, kind: PieceType) -> Vec<FileSq> {
        self.squares_of(self.side, kind)
            .map(|sq| FileSq::new(sq, self.side))
            .collect()
    }

    /// Pieces of `kind` standing on a file shared with another piece of the
    /// same kind, front to back and right to left.
    ///
    /// All such files are pooled into one list. With two files of two pawns
    /// each, the pawns are `a`..`d` across both files.
    fn stacked(&self, kind: PieceType) -> Vec<FileSq> {
        let all = self.file_squares(kind);
        let mut per_file = [0u8; 9];
        for fs in &all {
            per_file[fs.file as usize] += 1;
        }
        let mut stacked: Vec<FileSq> = all
            .into_iter()
            .filter(|fs| per_file[fs.file as usize] > 1)
            .collect();
        stacked.sort();
        stacked
    }

    /// Decode a WXF code against the current position.
    ///
    /// Only the piece's identity is looked up; the result is not checked for
    /// legality.
    pub fn wxf_to_move(&self, code: WxfCode) -> Result<Move, NotationError> {
        let code = normalise(code.0);
        let side = self.side;
        let text = || WxfCode(code).to_wxf_string();

        if let Some((src, dst)) = fixed::lookup(&code) {
            return Ok(match side {
                Color::Red => Move::new(src, dst),
                Color::Black => Move::new(src.flipped(), dst.flipped()),
            });
        }

        let (kind, ordinal, file) = match Direction::from_byte(code[0]) {
            Some(dir) => (byte_to_piece(code[1]), Some(dir.index() + FRONT), None),
            None => match byte_to_ordinal(code[1]) {
                Some(ordinal) => (byte_to_piece(code[0]), Some(ordinal), None),
                None => (byte_to_piece(code[0]), None, byte_to_digit(code[1])),
            },
        };
        let kind = kind.ok_or_else(|| NotationError::UnknownPiece { notation: text() })?;
        let no_piece = || NotationError::NoSuchPiece { notation: text() };

        let src = match (kind, ordinal) {
            // Advisor and bishop codes only come from the fixed table.
            (PieceType::Advisor | PieceType::Bishop, _) | (PieceType::King, Some(_)) => None,
            (_, None) => self
                .file_squares(kind)
                .into_iter()
                .find(|fs| Some(fs.file) == file),
            (_, Some(ordinal)) => {
                let stacked = self.stacked(kind);
                if stacked.len() == 2 && ordinal == BACK {
                    stacked.get(1).copied()
                } else {
                    let index = if ordinal >= FRONT { ordinal - FRONT } else { ordinal };
                    stacked.get(index).copied()
                }
            }
        }
        .ok_or_else(no_piece)?;

        let direction = Direction::from_byte(code[2])
            .ok_or_else(|| NotationError::UnknownDirection { notation: text() })?;
        let off_board = || NotationError::OffBoard { notation: text() };
        let amount = byte_to_digit(code[3]).ok_or_else(off_board)?;

        let (src_file, src_rank) = (i32::from(src.file), i32::from(src.rank));
        let (dst_file, dst_rank) = if kind == PieceType::Knight {
            let step = 3 - (i32::from(amount) - src_file).abs();
            match direction {
                Direction::Advance => (i32::from(amount), src_rank - step),
                _ => (i32::from(amount), src_rank + step),
            }
        } else {
            match direction {
                Direction::Advance => (src_file, src_rank - i32::from(amount) - 1),
                Direction::Retreat => (src_file, src_rank + i32::from(amount) + 1),
                Direction::Traverse => (i32::from(amount), src_rank),
            }
        };
        if !(0..=9).contains(&dst_rank) {
            return Err(off_board());
        }

        let dst = FileSq {
            file: dst_file as u8,
            rank: dst_rank as u8,
        };
        Ok(Move::new(src.to_square(side), dst.to_square(side)))
    }

    /// Encode `mv` for the side to move. The moving piece must be on the
    /// board; the move itself is not checked.
    pub fn move_to_wxf(&self, mv: Move) -> Result<WxfCode, NotationError> {
        let no_piece = || NotationError::NoSuchPiece {
            notation: mv.to_string(),
        };
        if !mv.src().in_board() || !mv.dst().in_board() {
            return Err(no_piece());
        }
        let moved = self.squares[mv.src().index()];
        if moved.is_empty() {
            return Err(no_piece());
        }

        let side = self.side;
        let kind = moved.kind();
        let src = FileSq::new(mv.src(), side);
        let dst = FileSq::new(mv.dst(), side);
        let mut code = [kind.to_char() as u8, digit_to_byte(src.file), b' ', b' '];

        if matches!(
            kind,
            PieceType::Knight | PieceType::Rook | PieceType::Cannon | PieceType::Pawn
        ) {
            let stacked = self.stacked(kind);
            if let Some(i) = stacked.iter().position(|&fs| fs == src) {
                let n = stacked.len();
                code[1] = if n == 2 && i == 1 {
                    ordinal_to_byte(BACK)
                } else if n > 3 {
                    ordinal_to_byte(i)
                } else {
                    ordinal_to_byte(i + FRONT)
                };
            }
        }

        let direction = if dst.rank > src.rank {
            Direction::Retreat
        } else if dst.rank < src.rank {
            Direction::Advance
        } else {
            Direction::Traverse
        };
        match kind {
            PieceType::Advisor | PieceType::Bishop if mv.is_promotion() => {
                code[2] = b'=';
                code[3] = b'P';
            }
            PieceType::Advisor | PieceType::Bishop | PieceType::Knight => {
                code[2] = if direction == Direction::Retreat { b'-' } else { b'+' };
                code[3] = digit_to_byte(dst.file);
            }
            _ => {
                code[2] = direction.to_byte();
                code[3] = if direction == Direction::Traverse {
                    digit_to_byte(dst.file)
                } else {
                    digit_to_byte(src.rank.abs_diff(dst.rank) - 1)
                };
            }
        }
        Ok(WxfCode(code))
    }
}

/// Mirror a WXF code left to right.
///
/// With stacked pawns on two files, `a`/`b` and `c`/`d` swap; other
/// ordinal layouts are passed through unchanged.
#[must_use]
pub fn file_mirror(code: WxfCode) -> WxfCode {
    let mut c = code.0;
    let kind = if Direction::from_byte(c[0]).is_none() {
        match byte_to_digit(c[1]) {
            Some(file) => c[1] = digit_to_byte(8 - file),
            None => {
                c[1] = match c[1] {
                    b'a' => b'c',
                    b'b' => b'd',
                    b'c' => b'a',
                    b'd' => b'b',
                    other => other,
                }
            }
        }
        byte_to_piece(c[0])
    } else {
        byte_to_piece(c[1])
    };

    let lands_on_file = matches!(
        kind,
        Some(PieceType::Advisor | PieceType::Bishop | PieceType::Knight)
    ) || Direction::from_byte(c[2]) == Some(Direction::Traverse);
    if lands_on_file {
        if let Some(file) = byte_to_digit(c[3]) {
            c[3] = digit_to_byte(8 - file);
        }
    }
    WxfCode(c)
}
