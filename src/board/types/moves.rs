//! Move types and move list.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;

use super::piece::Piece;
use super::square::Square;

/// Typical upper bound on moves from one position, used to size buffers
pub(crate) const MAX_MOVES: usize = 256;

/// A move: origin, destination and an optional promotion piece.
///
/// Moves are plain values. Castling is encoded as the king moving two files
/// and en passant as the pawn moving onto the target square; the board
/// decides which special rule applies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Piece>,
}

impl Move {
    /// Create a move with an optional promotion request
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Piece>) -> Self {
        Move {
            from,
            to,
            promotion,
        }
    }

    /// Create a move without promotion
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::new(from, to, None)
    }

    /// Create a promotion move
    #[inline]
    #[must_use]
    pub const fn new_promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move::new(from, to, Some(piece))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the requested promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        self.promotion
    }

    /// Encode in UCI long algebraic notation (e.g., "e2e4", "e7e8q")
    #[must_use]
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse UCI notation. The promotion letter is case-insensitive and must
    /// be one of n, b, r, q.
    fn from_str(uci: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let square = |range: &[char]| -> Result<Square, MoveParseError> {
            range
                .iter()
                .collect::<String>()
                .parse()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: uci.to_string(),
                })
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        let promotion = match chars.get(4) {
            None => None,
            Some(&c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => {
                    Some(piece)
                }
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        Ok(Move::new(from, to, promotion))
    }
}

/// Growable list of moves used while generating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}
