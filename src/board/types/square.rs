//! Square types and coordinate mapping.
//!
//! Squares are stored as indices into the padded 10x12 board: two border
//! ranks above and below the playing area and one border file on each side.
//! Rank 8 occupies indices 21..=28 and rank 1 occupies 91..=98.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of cells in the padded board.
pub const BOARD_SIZE: usize = 120;

const BOARD_WIDTH: usize = 10;

#[inline]
const fn is_playing_index(index: usize) -> bool {
    let row = index / BOARD_WIDTH;
    let col = index % BOARD_WIDTH;
    row >= 2 && row <= 9 && col >= 1 && col <= 8
}

/// Convert two-character square notation (e.g. "e4") to a padded-board index.
pub fn square_to_index(notation: &str) -> Result<usize, SquareError> {
    notation.parse::<Square>().map(Square::index)
}

/// Convert a padded-board index to square notation.
///
/// Border and out-of-range indices are rejected.
pub fn index_to_square(index: usize) -> Result<String, SquareError> {
    Square::from_index(index).map(|sq| sq.to_string())
}

/// A playing square on the padded board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    pub const A8: Square = Square(21);
    pub const E8: Square = Square(25);
    pub const H8: Square = Square(28);
    pub const A1: Square = Square(91);
    pub const E1: Square = Square(95);
    pub const H1: Square = Square(98);

    /// Create a square from a padded-board index, rejecting border cells.
    pub fn from_index(index: usize) -> Result<Self, SquareError> {
        if is_playing_index(index) {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::NotOnBoard { index })
        }
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1).
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square((20 + (file + 1) + (7 - rank) * BOARD_WIDTH) as u8))
        } else {
            None
        }
    }

    /// Padded-board index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % BOARD_WIDTH - 1
    }

    /// Rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        9 - self.0 as usize / BOARD_WIDTH
    }

    /// Board row (index / 10); rank 8 is row 2 and rank 1 is row 9
    #[inline]
    #[must_use]
    pub(crate) const fn row(self) -> usize {
        self.0 as usize / BOARD_WIDTH
    }

    /// Raw index reached by adding a direction offset. May land on a border cell.
    #[inline]
    #[must_use]
    pub(crate) const fn offset(self, delta: isize) -> usize {
        (self.0 as isize + delta) as usize
    }

    /// Wrap an index already known to be a playing cell.
    #[inline]
    #[must_use]
    pub(crate) const fn from_playing_index(index: usize) -> Self {
        debug_assert!(is_playing_index(index));
        Square(index as u8)
    }

    /// All 64 playing squares, rank 8 to rank 1, file a to h.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE)
            .filter(|&index| is_playing_index(index))
            .map(|index| Square(index as u8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => rank as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Square::new(file, rank).ok_or_else(invalid)
    }
}
