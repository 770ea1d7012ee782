use super::super::{Board, Cell, Color, Move, MoveList, Piece, Square};
use super::KNIGHT_OFFSETS;

/// Single steps onto empty or enemy-occupied cells.
pub(super) fn step(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[isize],
    moves: &mut MoveList,
) {
    for &delta in offsets {
        let idx = from.offset(delta);
        match board.cells[idx] {
            Cell::Empty => moves.push(Move::quiet(from, Square::from_playing_index(idx))),
            Cell::Occupied(other, _) if other != color => {
                moves.push(Move::quiet(from, Square::from_playing_index(idx)));
            }
            Cell::Occupied(..) | Cell::Border => {}
        }
    }
}

pub(super) fn step_threat(
    board: &Board,
    target: Square,
    color: Color,
    piece: Piece,
    offsets: &[isize],
) -> bool {
    offsets
        .iter()
        .any(|&delta| board.cells[target.offset(delta)].holds(color, piece))
}

pub(super) fn generate(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    step(board, from, color, &KNIGHT_OFFSETS, moves);
}

pub(super) fn threatens(board: &Board, target: Square, color: Color) -> bool {
    step_threat(board, target, color, Piece::Knight, &KNIGHT_OFFSETS)
}
