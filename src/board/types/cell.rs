//! Board cell contents.

use super::piece::{Color, Piece};

/// Contents of one cell of the padded board.
///
/// `Border` cells surround the playing area and are only produced when a
/// board is initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Occupied(Color, Piece),
    Empty,
    Border,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The piece in this cell, if any
    #[inline]
    #[must_use]
    pub const fn occupant(self) -> Option<(Color, Piece)> {
        match self {
            Cell::Occupied(color, piece) => Some((color, piece)),
            Cell::Empty | Cell::Border => None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn holds(self, color: Color, piece: Piece) -> bool {
        self == Cell::Occupied(color, piece)
    }

    /// Diagram character: FEN letter, '.' for empty, ' ' for border
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Occupied(color, piece) => piece.to_fen_char(color),
            Cell::Empty => '.',
            Cell::Border => ' ',
        }
    }
}
