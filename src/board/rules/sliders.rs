use super::super::make_unmake::{Bookkeeping, UnmakeInfo};
use super::super::{Board, Cell, Color, Move, MoveList, Piece, Square};
use super::{BISHOP_OFFSETS, ROOK_OFFSETS, ROYAL_OFFSETS};

/// Walk each direction until blocked. Empty cells and the first enemy piece
/// are recorded; own pieces and the border stop the ray silently.
pub(super) fn slide(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[isize],
    moves: &mut MoveList,
) {
    for &delta in offsets {
        let mut idx = from.offset(delta);
        loop {
            match board.cells[idx] {
                Cell::Empty => {
                    moves.push(Move::quiet(from, Square::from_playing_index(idx)));
                }
                Cell::Occupied(other, _) if other != color => {
                    moves.push(Move::quiet(from, Square::from_playing_index(idx)));
                    break;
                }
                Cell::Occupied(..) | Cell::Border => break,
            }
            idx = (idx as isize + delta) as usize;
        }
    }
}

/// Sliding moves are reversible, so a slider of `color` threatens `target`
/// exactly when the first piece met walking outwards from `target` is one.
pub(super) fn slide_threat(
    board: &Board,
    target: Square,
    color: Color,
    piece: Piece,
    offsets: &[isize],
) -> bool {
    offsets.iter().any(|&delta| {
        let mut idx = target.offset(delta);
        while board.cells[idx].is_empty() {
            idx = (idx as isize + delta) as usize;
        }
        board.cells[idx].holds(color, piece)
    })
}

pub(super) fn generate_bishop(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    slide(board, from, color, &BISHOP_OFFSETS, moves);
}

pub(super) fn generate_rook(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    slide(board, from, color, &ROOK_OFFSETS, moves);
}

pub(super) fn generate_queen(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    slide(board, from, color, &ROYAL_OFFSETS, moves);
}

pub(super) fn bishop_threatens(board: &Board, target: Square, color: Color) -> bool {
    slide_threat(board, target, color, Piece::Bishop, &BISHOP_OFFSETS)
}

pub(super) fn rook_threatens(board: &Board, target: Square, color: Color) -> bool {
    slide_threat(board, target, color, Piece::Rook, &ROOK_OFFSETS)
}

pub(super) fn queen_threatens(board: &Board, target: Square, color: Color) -> bool {
    slide_threat(board, target, color, Piece::Queen, &ROYAL_OFFSETS)
}

/// A rook leaving its home square forfeits that side's castling right.
pub(super) fn rook_side_effects(board: &mut Board, info: &mut UnmakeInfo) {
    if info.bookkeeping == Bookkeeping::Full {
        board
            .castling_rights
            .remove_for_rook_home(info.color, info.mv.from());
    }
}
