use super::super::make_unmake::{Bookkeeping, UnmakeInfo};
use super::super::{Board, Cell, Color, Move, MoveList, Piece, Square};
use super::knights::{step, step_threat};
use super::ROYAL_OFFSETS;

/// If `mv` is a castling king move for `color`, the rook's (from, to) squares.
///
/// The rook's destination is also the square the king passes through.
pub(crate) fn castle_rook_squares(mv: &Move, color: Color) -> Option<(Square, Square)> {
    let home = color.king_home();
    if mv.from() != home {
        return None;
    }
    let from = home.index();
    let to = mv.to().index();
    if to == from + 2 {
        Some((color.rook_home(true), Square::from_playing_index(from + 1)))
    } else if to + 2 == from {
        Some((color.rook_home(false), Square::from_playing_index(from - 1)))
    } else {
        None
    }
}

/// King steps plus castling. Castling is only offered from the home square,
/// with the right still held, the rook at home and every cell between king
/// and rook empty. Whether the king is attacked is checked by the legality
/// filter.
pub(super) fn generate(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    step(board, from, color, &ROYAL_OFFSETS, moves);

    if from != color.king_home() {
        return;
    }
    for kingside in [true, false] {
        if !board.castling_rights.has(color, kingside) {
            continue;
        }
        let rook = color.rook_home(kingside);
        if !board.cells[rook.index()].holds(color, Piece::Rook) {
            continue;
        }
        let (low, high) = if kingside {
            (from.index(), rook.index())
        } else {
            (rook.index(), from.index())
        };
        if !(low + 1..high).all(|idx| board.cells[idx].is_empty()) {
            continue;
        }
        let to = if kingside {
            from.index() + 2
        } else {
            from.index() - 2
        };
        moves.push(Move::quiet(from, Square::from_playing_index(to)));
    }
}

pub(super) fn threatens(board: &Board, target: Square, color: Color) -> bool {
    step_threat(board, target, color, Piece::King, &ROYAL_OFFSETS)
}

/// Any king move forfeits both castling rights; castling also carries the
/// rook across.
pub(super) fn side_effects(board: &mut Board, info: &mut UnmakeInfo) {
    let color = info.color;
    if info.bookkeeping == Bookkeeping::Full {
        board.castling_rights.remove_color(color);
    }

    let Some((rook_from, rook_to)) = castle_rook_squares(&info.mv, color) else {
        return;
    };
    if !board.cells[rook_from.index()].holds(color, Piece::Rook) {
        return;
    }
    board.cells[rook_from.index()] = Cell::Empty;
    board.cells[rook_to.index()] = Cell::Occupied(color, Piece::Rook);
    if info.bookkeeping == Bookkeeping::Full {
        board.relocate(color, rook_from, rook_to);
    }
    info.rook_shift = Some((rook_from, rook_to));
}
