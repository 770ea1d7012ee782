//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// FEN letters in emission order, paired with their bits
const FEN_LETTERS: [(char, u8); 4] = [
    ('K', CASTLE_WHITE_K),
    ('Q', CASTLE_WHITE_Q),
    ('k', CASTLE_BLACK_K),
    ('q', CASTLE_BLACK_Q),
];

/// Castling rights represented as a bitmask.
///
/// Rights are only ever removed during play, never restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Build from the four FEN flags
    #[must_use]
    pub const fn from_flags(
        white_kingside: bool,
        white_queenside: bool,
        black_kingside: bool,
        black_queenside: bool,
    ) -> Self {
        let mut bits = 0;
        if white_kingside {
            bits |= CASTLE_WHITE_K;
        }
        if white_queenside {
            bits |= CASTLE_WHITE_Q;
        }
        if black_kingside {
            bits |= CASTLE_BLACK_K;
        }
        if black_queenside {
            bits |= CASTLE_BLACK_Q;
        }
        CastlingRights(bits)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        let bit = Self::bit_for(color, kingside);
        self.0 & bit != 0
    }

    /// (kingside, queenside) for one color
    #[inline]
    #[must_use]
    pub const fn sides(self, color: Color) -> (bool, bool) {
        (self.has(color, true), self.has(color, false))
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Remove the right tied to a rook home square, if `square` is one.
    #[inline]
    pub(crate) fn remove_for_rook_home(&mut self, color: Color, square: Square) {
        if square == color.rook_home(true) {
            self.remove(color, true);
        } else if square == color.rook_home(false) {
            self.remove(color, false);
        }
    }

    /// Parse the FEN castling field (`-` or a subset of `KQkq`).
    ///
    /// Returns the first unrecognized character on failure.
    pub(crate) fn from_fen_field(field: &str) -> Result<Self, char> {
        let mut rights = CastlingRights::none();
        if field == "-" {
            return Ok(rights);
        }
        for c in field.chars() {
            let (_, bit) = FEN_LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .copied()
                .ok_or(c)?;
            rights.0 |= bit;
        }
        Ok(rights)
    }

    /// FEN castling field in `KQkq` order, or `-`
    #[must_use]
    pub fn to_fen_field(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        FEN_LETTERS
            .iter()
            .filter(|(_, bit)| self.0 & bit != 0)
            .map(|(letter, _)| *letter)
            .collect()
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
