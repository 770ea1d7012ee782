//! Error types for chess board operations.

use std::fmt;

use super::{Move, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongFieldCount { found: usize },
    /// Piece placement does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// A rank does not cover exactly eight files
    WrongFileCount { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not an integer in 0..=100
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not an integer >= 1
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN board must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} covers {files} files, expected 8")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}', expected 0-100")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}', expected at least 1")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move notation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Index is outside the playing area (border or out of range)
    NotOnBoard { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::NotOnBoard { index } => {
                write!(f, "Index {index} is not a playing square")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for applying a move to a position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move notation could not be decoded
    Notation(MoveParseError),
    /// The move is not in the current legal move set
    Illegal { mv: Move },
    /// Low-level application from an origin with no piece on it
    NotAPiece { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Notation(e) => write!(f, "Invalid move notation: {e}"),
            MoveError::Illegal { mv } => write!(f, "Illegal move '{mv}'"),
            MoveError::NotAPiece { square } => write!(f, "No piece on {square}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Notation(e) => Some(e),
            MoveError::Illegal { .. } | MoveError::NotAPiece { .. } => None,
        }
    }
}

impl From<MoveParseError> for MoveError {
    fn from(e: MoveParseError) -> Self {
        MoveError::Notation(e)
    }
}
