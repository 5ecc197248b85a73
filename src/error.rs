//! Hand-written error types for the crate's two points of fallible
//! parsing: FEN strings and algebraic square notation.
//!
//! Matches the teacher's `board::error` idiom: named-field enum
//! variants with manual `Display` and `std::error::Error` impls
//! rather than a derive macro.

use std::fmt;

/// Why a FEN string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FenError {
    /// Fewer than the four required whitespace-separated sections.
    TooFewParts { found: usize },
    /// A character in the piece-placement section was not a piece
    /// letter, a digit 1-8, or `/`.
    InvalidPiece { ch: char },
    /// A rank's files summed to something other than 8.
    InvalidRank { rank: usize, files: usize },
    /// The side-to-move section was not `w` or `b`.
    InvalidSideToMove { found: String },
    /// A castling-rights character was not one of `KQkq-`.
    InvalidCastling { ch: char },
    /// The en-passant section was not `-` or a valid algebraic square.
    InvalidEnPassant { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN has {found} space-separated parts, expected at least 4")
            }
            FenError::InvalidPiece { ch } => write!(f, "invalid piece character '{ch}'"),
            FenError::InvalidRank { rank, files } => {
                write!(f, "rank {rank} has {files} files, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { ch } => write!(f, "invalid castling character '{ch}'"),
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en-passant target '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why an algebraic square notation (e.g. `"e4"`) failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SquareError {
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
