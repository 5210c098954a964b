//! UCCI coordinate moves such as `h2e2`.

use std::str::FromStr;

use crate::board::error::NotationError;
use crate::board::types::{Move, Square};

/// Parse a four-character UCCI move. Both squares must lie on the board.
pub fn parse_ucci(notation: &str) -> Result<Move, NotationError> {
    let len = notation.chars().count();
    if len != 4 {
        return Err(NotationError::InvalidLength { len });
    }
    let invalid = || NotationError::InvalidSquare {
        notation: notation.to_string(),
    };
    if !notation.is_ascii() {
        return Err(invalid());
    }

    let src: Square = notation[0..2].parse().map_err(|_| invalid())?;
    let dst: Square = notation[2..4].parse().map_err(|_| invalid())?;
    Ok(Move::new(src, dst))
}

/// UCCI text for `mv`; a promotion repeats its square, the null move is `0000`.
#[must_use]
pub fn to_ucci(mv: Move) -> String {
    mv.to_string()
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ucci(s)
    }
}
