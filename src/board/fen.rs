use std::str::FromStr;

use super::error::FenError;
use super::state::Position;
use super::types::{Color, Piece, PieceType, Square, FILE_LEFT, FILE_RIGHT, RANK_BOTTOM, RANK_TOP};

/// The standard opening position.
pub const START_FEN: &str = "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w";

/// Next free slot per side and piece type while a board is being filled.
pub(crate) struct SlotCursor {
    next: [[u8; 7]; 2],
}

impl SlotCursor {
    pub(crate) fn new() -> Self {
        let mut next = [[0u8; 7]; 2];
        for kind in PieceType::ALL {
            next[0][kind.index()] = kind.slots().start;
            next[1][kind.index()] = kind.slots().start;
        }
        SlotCursor { next }
    }

    /// Claim the next slot of `kind` for `color`, if the type has one left.
    pub(crate) fn claim(&mut self, color: Color, kind: PieceType) -> Option<Piece> {
        let slot = &mut self.next[color.index()][kind.index()];
        if *slot >= kind.slots().end {
            return None;
        }
        let piece = Piece::new(color, *slot);
        *slot += 1;
        Some(piece)
    }
}

fn letter_color(c: char) -> Color {
    if c.is_ascii_uppercase() {
        Color::Red
    } else {
        Color::Black
    }
}

impl Position {
    /// Parse a FEN string under default rules. Never fails: unknown letters
    /// and pieces beyond a type's slot count are skipped.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        let mut pos = Position::empty();
        pos.load_fen(fen);
        pos
    }

    /// Replace the board with `fen`, keeping rules and tables. Lenient in
    /// the same way as [`from_fen`](Self::from_fen).
    pub fn load_fen(&mut self, fen: &str) {
        self.clear();
        let (board, rest) = fen.split_once(' ').unwrap_or((fen, ""));
        let mut cursor = SlotCursor::new();
        let (mut x, mut y) = (FILE_LEFT, RANK_TOP);

        for c in board.chars() {
            match c {
                '/' => {
                    x = FILE_LEFT;
                    y += 1;
                    if y > RANK_BOTTOM {
                        break;
                    }
                }
                '1'..='9' => x = x.saturating_add(c as u8 - b'0'),
                c if c.is_ascii_alphabetic() => {
                    if x > FILE_RIGHT {
                        continue;
                    }
                    match PieceType::from_char(c) {
                        Some(kind) => match cursor.claim(letter_color(c), kind) {
                            Some(piece) => self.add_piece(Square::from_coords(x, y), piece),
                            None => {
                                #[cfg(feature = "logging")]
                                log::debug!("FEN piece '{c}' over capacity, dropped");
                            }
                        },
                        None => {
                            #[cfg(feature = "logging")]
                            log::debug!("unknown FEN letter '{c}' skipped");
                        }
                    }
                    x += 1;
                }
                _ => {}
            }
        }

        if rest.starts_with('b') {
            self.change_side();
        }
        self.set_irreversible();
    }

    /// Parse a FEN string under default rules, rejecting anything malformed.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let board = fields.next().ok_or(FenError::Empty)?;
        let side = fields.next().unwrap_or("");

        let ranks: Vec<&str> = board.split('/').collect();
        if ranks.len() > 10 {
            return Err(FenError::TooManyRanks { ranks: ranks.len() });
        }

        let mut pos = Position::empty();
        let mut cursor = SlotCursor::new();
        for (rank, text) in ranks.iter().enumerate() {
            let mut files = 0usize;
            for c in text.chars() {
                if let Some(d) = c.to_digit(10).filter(|d| (1..=9).contains(d)) {
                    files += d as usize;
                } else {
                    let kind =
                        PieceType::from_char(c).ok_or(FenError::UnknownPiece { char: c })?;
                    if files >= 9 {
                        return Err(FenError::TooManyFiles {
                            rank,
                            files: files + 1,
                        });
                    }
                    let piece = cursor
                        .claim(letter_color(c), kind)
                        .ok_or(FenError::PieceOverflow { char: c })?;
                    let sq = Square::from_coords(FILE_LEFT + files as u8, RANK_TOP + rank as u8);
                    pos.add_piece(sq, piece);
                    files += 1;
                }
                if files > 9 {
                    return Err(FenError::TooManyFiles { rank, files });
                }
            }
        }

        match side {
            "w" | "r" => {}
            "b" => pos.change_side(),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }
        pos.set_irreversible();
        Ok(pos)
    }

    /// Board field plus side-to-move letter.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(10);
        for y in RANK_TOP..=RANK_BOTTOM {
            let mut row = String::new();
            let mut empty = 0;
            for x in FILE_LEFT..=FILE_RIGHT {
                let pc = self.squares[Square::from_coords(x, y).index()];
                if pc.is_empty() {
                    empty += 1;
                    continue;
                }
                if empty > 0 {
                    row.push_str(&empty.to_string());
                    empty = 0;
                }
                row.push(pc.to_fen_char());
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side {
            Color::Red => "w",
            Color::Black => "b",
        };
        format!("{} {}", rows.join("/"), active)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
