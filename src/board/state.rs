use std::collections::BTreeSet;

use super::{Cell, CastlingRights, Color, Piece, Square, BOARD_SIZE};

/// Raw game state on the padded 10x12 board.
///
/// `Board` carries no derived caches, so it can be mutated freely by
/// make/unmake during legality checks and perft. [`Position`](super::Position)
/// wraps it with the cached legal move set and status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [Cell; BOARD_SIZE],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    // Piece locations per color, kept in sync by bookkeeping moves
    pub(crate) pieces: [BTreeSet<Square>; 2],
    pub(crate) kings: [Option<Square>; 2],
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for sq in Square::all() {
            match sq.rank() {
                0 => board.place(sq, Color::White, back_rank[sq.file()]),
                1 => board.place(sq, Color::White, Piece::Pawn),
                6 => board.place(sq, Color::Black, Piece::Pawn),
                7 => board.place(sq, Color::Black, back_rank[sq.file()]),
                _ => {}
            }
        }

        board.castling_rights = CastlingRights::all();
        board
    }

    /// A board with no pieces, White to move and no rights.
    pub(crate) fn empty() -> Self {
        let mut cells = [Cell::Border; BOARD_SIZE];
        for sq in Square::all() {
            cells[sq.index()] = Cell::Empty;
        }
        Board {
            cells,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            pieces: [BTreeSet::new(), BTreeSet::new()],
            kings: [None, None],
        }
    }

    /// Put a piece on an empty square during setup.
    pub(crate) fn place(&mut self, sq: Square, color: Color, piece: Piece) {
        self.cells[sq.index()] = Cell::Occupied(color, piece);
        self.pieces[color.index()].insert(sq);
        if piece == Piece::King && self.kings[color.index()].is_none() {
            self.kings[color.index()] = Some(sq);
        }
    }

    /// Move a location in `color`'s piece set.
    pub(crate) fn relocate(&mut self, color: Color, from: Square, to: Square) {
        let set = &mut self.pieces[color.index()];
        set.remove(&from);
        set.insert(to);
    }

    pub(crate) fn remove_from_set(&mut self, color: Color, sq: Square) {
        self.pieces[color.index()].remove(&sq);
        if self.kings[color.index()] == Some(sq) {
            self.kings[color.index()] = None;
        }
    }

    /// Contents of a square
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Color and kind of the piece on a square
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cells[sq.index()].occupant()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Squares occupied by `color`'s pieces, in board order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces[color.index()].iter().copied()
    }

    /// Square of `color`'s king, if one is on the board
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
