use std::ops::Deref;

use super::error::MoveError;
use super::{Board, CastlingRights, Cell, Color, Move, Piece, Square};

/// How much of the game state a move application maintains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Bookkeeping {
    /// Cells, piece sets, kings, rights, en passant, clocks and side to move
    Full,
    /// Cells only, for speculative legality checks
    BoardOnly,
}

/// Everything needed to take a move back exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) color: Color,
    pub(crate) moved: Piece,
    /// Square, color and kind of the captured piece; the square differs from
    /// the destination for en passant
    pub(crate) captured: Option<(Square, Color, Piece)>,
    /// Rook (from, to) when the move was a castle
    pub(crate) rook_shift: Option<(Square, Square)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_kings: [Option<Square>; 2],
    pub(crate) bookkeeping: Bookkeeping,
}

impl UnmakeInfo {
    /// The move this record undoes
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The piece captured by the move, if any
    #[must_use]
    pub fn captured(&self) -> Option<(Color, Piece)> {
        self.captured.map(|(_, color, piece)| (color, piece))
    }
}

impl Board {
    /// Apply a move without checking legality.
    ///
    /// The mover's color is taken from the origin square, not from the side
    /// to move. Errors only when the origin holds no piece.
    pub fn make_move(&mut self, mv: &Move) -> Result<UnmakeInfo, MoveError> {
        let (color, piece) = self
            .piece_at(mv.from())
            .ok_or(MoveError::NotAPiece { square: mv.from() })?;
        Ok(self.make_move_with(*mv, color, piece, Bookkeeping::Full))
    }

    /// Apply a move taken from this board's own legal generation.
    ///
    /// # Panics
    /// Panics if the origin is empty, which generation never produces.
    pub(crate) fn make_generated_move(&mut self, mv: Move) -> UnmakeInfo {
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            unreachable!("generated move {mv} starts on an empty square");
        };
        self.make_move_with(mv, color, piece, Bookkeeping::Full)
    }

    pub(crate) fn make_move_with(
        &mut self,
        mv: Move,
        color: Color,
        piece: Piece,
        bookkeeping: Bookkeeping,
    ) -> UnmakeInfo {
        let from = mv.from();
        let to = mv.to();
        let captured = self
            .cell(to)
            .occupant()
            .map(|(cap_color, cap_piece)| (to, cap_color, cap_piece));

        let mut info = UnmakeInfo {
            mv,
            color,
            moved: piece,
            captured,
            rook_shift: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_side_to_move: self.side_to_move,
            previous_kings: self.kings,
            bookkeeping,
        };

        self.cells[from.index()] = Cell::Empty;
        self.cells[to.index()] = Cell::Occupied(color, piece);

        if bookkeeping == Bookkeeping::Full {
            if let Some((_, cap_color, cap_piece)) = captured {
                self.remove_from_set(cap_color, to);
                if cap_piece == Piece::Rook {
                    self.castling_rights.remove_for_rook_home(cap_color, to);
                }
                self.halfmove_clock = 0;
            } else {
                self.halfmove_clock += 1;
            }
            self.relocate(color, from, to);
            if piece == Piece::King {
                self.kings[color.index()] = Some(to);
            }
            self.en_passant_target = None;
        }

        (piece.rules().side_effects)(self, &mut info);

        if bookkeeping == Bookkeeping::Full {
            if color == Color::Black {
                self.fullmove_number = self.fullmove_number.saturating_add(1);
            }
            self.side_to_move = color.opponent();
        }

        info
    }

    /// Take back a move made by [`Board::make_move`], restoring the exact
    /// prior state.
    pub fn unmake_move(&mut self, info: UnmakeInfo) {
        let UnmakeInfo { mv, color, .. } = info;

        if let Some((rook_from, rook_to)) = info.rook_shift {
            self.cells[rook_to.index()] = Cell::Empty;
            self.cells[rook_from.index()] = Cell::Occupied(color, Piece::Rook);
        }
        self.cells[mv.to().index()] = Cell::Empty;
        self.cells[mv.from().index()] = Cell::Occupied(color, info.moved);
        if let Some((sq, cap_color, cap_piece)) = info.captured {
            self.cells[sq.index()] = Cell::Occupied(cap_color, cap_piece);
        }

        if info.bookkeeping == Bookkeeping::Full {
            self.relocate(color, mv.to(), mv.from());
            if let Some((rook_from, rook_to)) = info.rook_shift {
                self.relocate(color, rook_to, rook_from);
            }
            if let Some((sq, cap_color, _)) = info.captured {
                self.pieces[cap_color.index()].insert(sq);
            }
            self.kings = info.previous_kings;
        }

        self.en_passant_target = info.previous_en_passant_target;
        self.castling_rights = info.previous_castling_rights;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.side_to_move = info.previous_side_to_move;
    }

    /// Apply `mv` for as long as the returned guard lives, touching cells only.
    pub(crate) fn speculate(&mut self, mv: Move, color: Color, piece: Piece) -> Speculation<'_> {
        let undo = self.make_move_with(mv, color, piece, Bookkeeping::BoardOnly);
        Speculation {
            board: self,
            undo: Some(undo),
        }
    }

    /// Apply `mv` with full bookkeeping for as long as the returned guard
    /// lives. The board is restored when the guard is dropped.
    pub fn preview(&mut self, mv: &Move) -> Result<Speculation<'_>, MoveError> {
        let undo = self.make_move(mv)?;
        Ok(Speculation {
            board: self,
            undo: Some(undo),
        })
    }
}

/// A move applied to a borrowed board, taken back on drop.
///
/// Restoration runs on every exit path, including early returns and panics
/// unwinding through the scope that holds the guard.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    undo: Option<UnmakeInfo>,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        if let Some(info) = self.undo.take() {
            self.board.unmake_move(info);
        }
    }
}
