use super::super::make_unmake::{Bookkeeping, UnmakeInfo};
use super::super::{Board, Cell, Color, Move, MoveList, Piece, Square, PROMOTION_PIECES};

/// Record a pawn move, branching into one move per promotion piece when the
/// destination is on the promotion row.
fn push_pawn_move(from: Square, to: Square, color: Color, moves: &mut MoveList) {
    if to.row() == color.promotion_row() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::new_promotion(from, to, piece));
        }
    } else {
        moves.push(Move::quiet(from, to));
    }
}

/// True if `target` is the en passant square and the pawn that skipped over
/// it belongs to the opponent of `color`.
fn is_en_passant_capture(board: &Board, target: Square, color: Color) -> bool {
    board.en_passant_target == Some(target)
        && board.cells[target.offset(-color.forward())].holds(color.opponent(), Piece::Pawn)
}

pub(super) fn generate(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let forward = color.forward();

    let one = from.offset(forward);
    if board.cells[one].is_empty() {
        push_pawn_move(from, Square::from_playing_index(one), color, moves);

        if from.row() == color.double_step_row() {
            let two = from.offset(2 * forward);
            if board.cells[two].is_empty() {
                moves.push(Move::quiet(from, Square::from_playing_index(two)));
            }
        }
    }

    for side in [-1, 1] {
        let idx = from.offset(forward + side);
        match board.cells[idx] {
            Cell::Occupied(other, _) if other != color => {
                push_pawn_move(from, Square::from_playing_index(idx), color, moves);
            }
            Cell::Empty => {
                let target = Square::from_playing_index(idx);
                if is_en_passant_capture(board, target, color) {
                    moves.push(Move::quiet(from, target));
                }
            }
            Cell::Occupied(..) | Cell::Border => {}
        }
    }
}

/// Pawn captures are not reversible, so look backwards from `target` to the
/// two cells a `color` pawn would capture from.
pub(super) fn threatens(board: &Board, target: Square, color: Color) -> bool {
    let behind = -color.forward();
    [behind - 1, behind + 1]
        .iter()
        .any(|&delta| board.cells[target.offset(delta)].holds(color, Piece::Pawn))
}

pub(super) fn side_effects(board: &mut Board, info: &mut UnmakeInfo) {
    let color = info.color;
    let mv = info.mv;
    let forward = color.forward();
    let full = info.bookkeeping == Bookkeeping::Full;

    if info.previous_en_passant_target == Some(mv.to()) {
        let passed = Square::from_playing_index(mv.to().offset(-forward));
        let enemy = color.opponent();
        if board.cells[passed.index()].holds(enemy, Piece::Pawn) {
            board.cells[passed.index()] = Cell::Empty;
            if full {
                board.remove_from_set(enemy, passed);
            }
            info.captured = Some((passed, enemy, Piece::Pawn));
        }
    }

    if full {
        let double_step = mv.from().offset(2 * forward) == mv.to().index();
        board.en_passant_target = if double_step {
            Some(Square::from_playing_index(mv.from().offset(forward)))
        } else {
            None
        };
        board.halfmove_clock = 0;
    }

    if mv.to().row() == color.promotion_row() {
        let promoted = Piece::promotion_or_queen(mv.promotion());
        board.cells[mv.to().index()] = Cell::Occupied(color, promoted);
    }
}
