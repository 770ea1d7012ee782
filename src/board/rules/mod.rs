//! Per-piece rules: pseudolegal movement, threat detection and the side
//! effects of making a move.
//!
//! Every piece kind has one entry in a static dispatch table. Offsets are in
//! padded-board index units, so stepping onto a `Cell::Border` is the only
//! off-board test any generator needs.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::make_unmake::UnmakeInfo;
use super::{Board, Color, MoveList, Piece, Square};

pub(crate) use kings::castle_rook_squares;

pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];
pub(crate) const BISHOP_OFFSETS: [isize; 4] = [-11, -9, 9, 11];
pub(crate) const ROOK_OFFSETS: [isize; 4] = [-10, -1, 1, 10];
pub(crate) const ROYAL_OFFSETS: [isize; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// Generates pseudolegal moves for a piece of `Color` standing on `Square`.
pub(crate) type GenerateFn = fn(&Board, Square, Color, &mut MoveList);
/// Does a piece of this kind and `Color` threaten `Square`?
pub(crate) type ThreatFn = fn(&Board, Square, Color) -> bool;
/// Kind-specific side effects, run after the generic part of a move.
pub(crate) type SideEffectFn = fn(&mut Board, &mut UnmakeInfo);

pub(crate) struct PieceRules {
    pub(crate) generate: GenerateFn,
    pub(crate) threatens: ThreatFn,
    pub(crate) side_effects: SideEffectFn,
}

static RULES: [PieceRules; 6] = [
    PieceRules {
        generate: pawns::generate,
        threatens: pawns::threatens,
        side_effects: pawns::side_effects,
    },
    PieceRules {
        generate: knights::generate,
        threatens: knights::threatens,
        side_effects: no_side_effects,
    },
    PieceRules {
        generate: sliders::generate_bishop,
        threatens: sliders::bishop_threatens,
        side_effects: no_side_effects,
    },
    PieceRules {
        generate: sliders::generate_rook,
        threatens: sliders::rook_threatens,
        side_effects: sliders::rook_side_effects,
    },
    PieceRules {
        generate: sliders::generate_queen,
        threatens: sliders::queen_threatens,
        side_effects: no_side_effects,
    },
    PieceRules {
        generate: kings::generate,
        threatens: kings::threatens,
        side_effects: kings::side_effects,
    },
];

impl Piece {
    /// Rule table entry for this piece kind
    #[inline]
    pub(crate) fn rules(self) -> &'static PieceRules {
        &RULES[self.index()]
    }
}

fn no_side_effects(_board: &mut Board, _info: &mut UnmakeInfo) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_piece_index() {
        let board = Board::try_from_fen("8/8/8/8/4N3/8/8/8 w - - 0 1").unwrap();
        let e4: Square = "e4".parse().unwrap();
        let mut moves = MoveList::new();
        (Piece::Knight.rules().generate)(&board, e4, Color::White, &mut moves);
        assert_eq!(moves.len(), 8);

        let mut moves = MoveList::new();
        (Piece::Bishop.rules().generate)(&board, e4, Color::White, &mut moves);
        assert_eq!(moves.len(), 13);

        let mut moves = MoveList::new();
        (Piece::Rook.rules().generate)(&board, e4, Color::White, &mut moves);
        assert_eq!(moves.len(), 14);

        let mut moves = MoveList::new();
        (Piece::Queen.rules().generate)(&board, e4, Color::White, &mut moves);
        assert_eq!(moves.len(), 27);
    }
}
