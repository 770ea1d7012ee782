//! Read-only snapshot of a position for rendering and transport.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::status::Status;
use super::{Color, Piece, Position, Square};

/// The piece standing on one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareView {
    pub piece: Piece,
    pub color: Color,
}

/// Everything a client needs to draw a position and offer moves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardView {
    pub fen: String,
    pub active_color: Color,
    pub status: Status,
    /// Legal moves in coordinate notation, sorted
    pub legal_moves: Vec<String>,
    /// All 64 squares by name; `None` for an empty square
    pub squares: BTreeMap<String, Option<SquareView>>,
}

impl Position {
    #[must_use]
    pub fn view(&self) -> BoardView {
        let squares = Square::all()
            .map(|sq| {
                let occupant = self
                    .piece_at(sq)
                    .map(|(color, piece)| SquareView { piece, color });
                (sq.to_string(), occupant)
            })
            .collect();

        BoardView {
            fen: self.to_fen(),
            active_color: self.side_to_move(),
            status: self.status(),
            legal_moves: self.legal_moves_uci(),
            squares,
        }
    }
}
