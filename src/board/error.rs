//! Error types for position setup and move notation.

use std::fmt;

/// Error type for strict FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string is empty
    Empty,
    /// Unknown piece letter in the board field
    UnknownPiece { char: char },
    /// More than ten ranks in the board field
    TooManyRanks { ranks: usize },
    /// A rank describes more than nine files
    TooManyFiles { rank: usize, files: usize },
    /// More pieces of one type than that type has slots for
    PieceOverflow { char: char },
    /// Side to move is neither `w` nor `b`
    InvalidSideToMove { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::UnknownPiece { char } => {
                write!(f, "Unknown piece letter '{char}' in FEN")
            }
            FenError::TooManyRanks { ranks } => {
                write!(f, "FEN has {ranks} ranks, at most 10 allowed")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::PieceOverflow { char } => {
                write!(f, "Too many pieces of type '{char}'")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for UCCI, WXF and Chinese move notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Notation must be exactly four characters
    InvalidLength { len: usize },
    /// A square in a UCCI string is malformed or off the board
    InvalidSquare { notation: String },
    /// Piece letter or word not recognised
    UnknownPiece { notation: String },
    /// Direction byte is not one of `+`, `.`, `-`, `=`
    UnknownDirection { notation: String },
    /// No piece of the side to move matches the code
    NoSuchPiece { notation: String },
    /// Decoded destination lies outside the board
    OffBoard { notation: String },
    /// Chinese text could not be mapped to a code
    InvalidText { text: String },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidLength { len } => {
                write!(f, "Move notation must be 4 characters, found {len}")
            }
            NotationError::InvalidSquare { notation } => {
                write!(f, "Invalid square in '{notation}'")
            }
            NotationError::UnknownPiece { notation } => {
                write!(f, "Unknown piece in '{notation}'")
            }
            NotationError::UnknownDirection { notation } => {
                write!(f, "Unknown direction in '{notation}'")
            }
            NotationError::NoSuchPiece { notation } => {
                write!(f, "No piece matches '{notation}'")
            }
            NotationError::OffBoard { notation } => {
                write!(f, "Destination of '{notation}' is off the board")
            }
            NotationError::InvalidText { text } => {
                write!(f, "Cannot read move text '{text}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-9)
    RankOutOfBounds { rank: char },
    /// File out of bounds (must be a-i)
    FileOutOfBounds { file: char },
    /// Invalid coordinate notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank '{rank}' out of bounds (must be 0-9)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File '{file}' out of bounds (must be a-i)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
