//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece types in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a character, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Resolve a requested promotion piece.
    ///
    /// Pawns and kings are not valid promotion targets; they, and a missing
    /// request, resolve to a queen.
    #[inline]
    #[must_use]
    pub const fn promotion_or_queen(requested: Option<Piece>) -> Piece {
        match requested {
            Some(Piece::Knight) => Piece::Knight,
            Some(Piece::Bishop) => Piece::Bishop,
            Some(Piece::Rook) => Piece::Rook,
            _ => Piece::Queen,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        f.write_str(name)
    }
}

/// Promotion piece choices in generation order
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

/// Fixed per-color geometry on the padded board.
struct ColorGeometry {
    forward: isize,
    double_step_row: usize,
    promotion_row: usize,
    king_home: Square,
    kingside_rook_home: Square,
    queenside_rook_home: Square,
}

const GEOMETRY: [ColorGeometry; 2] = [
    ColorGeometry {
        forward: -10,
        double_step_row: 8,
        promotion_row: 2,
        king_home: Square::E1,
        kingside_rook_home: Square::H1,
        queenside_rook_home: Square::A1,
    },
    ColorGeometry {
        forward: 10,
        double_step_row: 3,
        promotion_row: 9,
        king_home: Square::E8,
        kingside_rook_home: Square::H8,
        queenside_rook_home: Square::A8,
    },
];

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    const fn geometry(self) -> &'static ColorGeometry {
        &GEOMETRY[self.index()]
    }

    /// Index offset of one pawn step forward (-10 for White, +10 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        self.geometry().forward
    }

    /// Board row (index / 10) from which pawns may double step
    #[inline]
    #[must_use]
    pub(crate) const fn double_step_row(self) -> usize {
        self.geometry().double_step_row
    }

    /// Board row (index / 10) on which pawns promote
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_row(self) -> usize {
        self.geometry().promotion_row
    }

    #[inline]
    #[must_use]
    pub(crate) const fn king_home(self) -> Square {
        self.geometry().king_home
    }

    #[inline]
    #[must_use]
    pub(crate) const fn rook_home(self, kingside: bool) -> Square {
        if kingside {
            self.geometry().kingside_rook_home
        } else {
            self.geometry().queenside_rook_home
        }
    }

    /// FEN side-to-move letter
    #[inline]
    #[must_use]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
