//! Chinese move text such as 炮二平五 or 马８进７.
//!
//! Text is translated to and from [`WxfCode`], which carries the same four
//! pieces of information.

use super::wxf::{
    byte_to_digit, byte_to_ordinal, byte_to_piece, digit_to_byte, ordinal_to_byte, Direction,
    WxfCode,
};
use crate::board::error::NotationError;
use crate::board::state::Position;
use crate::board::types::{Color, Move, PieceType};

const PIECE_WORDS: [[char; 7]; 2] = [
    ['帅', '仕', '相', '马', '车', '炮', '兵'],
    ['将', '士', '象', '马', '车', '炮', '卒'],
];
const DIGIT_WORDS: [[char; 9]; 2] = [
    ['一', '二', '三', '四', '五', '六', '七', '八', '九'],
    ['１', '２', '３', '４', '５', '６', '７', '８', '９'],
];
const DIRECTION_WORDS: [char; 3] = ['进', '平', '退'];
/// Ordinals: 一..五 for four or more pieces on a file, then 前中后.
const POSITION_WORDS: [char; 8] = ['一', '二', '三', '四', '五', '前', '中', '后'];
/// 跑 for red, 变 for black.
const PROMOTE_WORDS: [char; 2] = ['跑', '变'];

fn word_to_piece(ch: char) -> Option<PieceType> {
    match ch {
        '帥' | '將' => Some(PieceType::King),
        '馬' | '傌' => Some(PieceType::Knight),
        '車' | '硨' | '俥' => Some(PieceType::Rook),
        '包' | '砲' => Some(PieceType::Cannon),
        _ => PIECE_WORDS
            .iter()
            .find_map(|words| words.iter().position(|&w| w == ch))
            .and_then(PieceType::from_index),
    }
}

/// 0..8 from a red digit, a full-width digit or an ASCII digit.
fn word_to_digit(ch: char) -> Option<u8> {
    DIGIT_WORDS
        .iter()
        .find_map(|words| words.iter().position(|&w| w == ch))
        .or_else(|| ch.to_digit(10).filter(|d| (1..=9).contains(d)).map(|d| d as usize - 1))
        .map(|d| d as u8)
}

fn word_to_direction(ch: char) -> Option<Direction> {
    match ch {
        '进' | '進' => Some(Direction::Advance),
        '平' => Some(Direction::Traverse),
        '退' => Some(Direction::Retreat),
        _ => None,
    }
}

fn word_to_position(ch: char) -> Option<usize> {
    match ch {
        '後' => Some(7),
        _ => POSITION_WORDS.iter().position(|&w| w == ch),
    }
}

fn is_promote_word(ch: char) -> bool {
    matches!(ch, '变' | '跑' | '變')
}

/// Translate four characters of Chinese move text into a WXF code.
///
/// `士四变兵` reads as `A4=P`. Traditional forms are accepted alongside the
/// simplified ones.
pub fn chinese_to_wxf(text: &str) -> Result<WxfCode, NotationError> {
    let chars: Vec<char> = text.chars().collect();
    let [c0, c1, c2, c3] = chars[..] else {
        return Err(NotationError::InvalidLength { len: chars.len() });
    };
    let invalid = || NotationError::InvalidText {
        text: text.to_string(),
    };

    let position = word_to_position(c0);
    let (piece_word, second) = match position {
        Some(ordinal) => (c1, ordinal_to_byte(ordinal)),
        None => (c0, digit_to_byte(word_to_digit(c1).ok_or_else(invalid)?)),
    };
    let kind = word_to_piece(piece_word).ok_or_else(invalid)?;

    let mut code = [kind.to_char() as u8, second, b'=', b'P'];
    if !(is_promote_word(c2) && word_to_piece(c3) == Some(PieceType::Pawn)) {
        code[2] = word_to_direction(c2).ok_or_else(invalid)?.to_byte();
        code[3] = digit_to_byte(word_to_digit(c3).ok_or_else(invalid)?);
    }
    Ok(WxfCode(code))
}

/// Render a WXF code as Chinese text in `side`'s characters.
pub fn wxf_to_chinese(code: WxfCode, side: Color) -> Result<String, NotationError> {
    let c = code.0;
    let notation = || code.to_wxf_string();
    let unknown_piece = || NotationError::UnknownPiece {
        notation: notation(),
    };
    let bad_digit = || NotationError::InvalidSquare {
        notation: notation(),
    };
    let pieces = &PIECE_WORDS[side.index()];
    let digits = &DIGIT_WORDS[side.index()];

    let (w0, w1) = match Direction::from_byte(c[0]) {
        Some(dir) => {
            let kind = byte_to_piece(c[1]).ok_or_else(unknown_piece)?;
            (POSITION_WORDS[dir.index() + 5], pieces[kind.index()])
        }
        None => {
            let kind = byte_to_piece(c[0]).ok_or_else(unknown_piece)?;
            match byte_to_ordinal(c[1]) {
                Some(ordinal) => (POSITION_WORDS[ordinal], pieces[kind.index()]),
                None => {
                    let file = byte_to_digit(c[1]).ok_or_else(bad_digit)?;
                    (pieces[kind.index()], digits[file as usize])
                }
            }
        }
    };

    let (w2, w3) = if c[2] == b'=' && byte_to_piece(c[3]) == Some(PieceType::Pawn) {
        (PROMOTE_WORDS[side.index()], pieces[PieceType::Pawn.index()])
    } else {
        let dir = Direction::from_byte(c[2]).ok_or_else(|| NotationError::UnknownDirection {
            notation: notation(),
        })?;
        let amount = byte_to_digit(c[3]).ok_or_else(bad_digit)?;
        (DIRECTION_WORDS[dir.index()], digits[amount as usize])
    };

    Ok([w0, w1, w2, w3].iter().collect())
}

impl Position {
    /// Chinese text for `mv`, written for the side to move.
    pub fn move_to_chinese(&self, mv: Move) -> Result<String, NotationError> {
        wxf_to_chinese(self.move_to_wxf(mv)?, self.side)
    }

    /// Decode Chinese move text against the current position.
    pub fn chinese_to_move(&self, text: &str) -> Result<Move, NotationError> {
        self.wxf_to_move(chinese_to_wxf(text)?)
    }
}
