use super::rules::castle_rook_squares;
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pseudolegal moves of the piece on `from`, ignoring king safety.
    ///
    /// Empty if the square holds no piece.
    #[must_use]
    pub fn pseudolegal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            (piece.rules().generate)(self, from, color, &mut moves);
        }
        moves
    }

    /// Does any piece of `attacker_color` threaten `square`?
    #[must_use]
    pub fn is_square_threatened(&self, square: Square, attacker_color: Color) -> bool {
        Piece::ALL
            .iter()
            .any(|piece| (piece.rules().threatens)(self, square, attacker_color))
    }

    /// Does a piece of kind `piece` and color `attacker_color` threaten `square`?
    #[must_use]
    pub fn is_threatened_by(&self, square: Square, piece: Piece, attacker_color: Color) -> bool {
        (piece.rules().threatens)(self, square, attacker_color)
    }

    /// Is `color`'s king attacked? A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_sq) => self.is_square_threatened(king_sq, color.opponent()),
            None => false,
        }
    }

    /// Legal moves for the side to move.
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let color = self.side_to_move;
        let mut moves = MoveList::new();

        let origins: Vec<Square> = self.pieces(color).collect();
        for from in origins {
            if let Some((owner, piece)) = self.piece_at(from) {
                if owner == color {
                    (piece.rules().generate)(self, from, color, &mut moves);
                }
            }
        }

        moves.retain(|mv| self.leaves_king_safe(mv, color));
        moves
    }

    /// Speculatively apply `mv` and test the mover's king square.
    fn leaves_king_safe(&mut self, mv: &Move, color: Color) -> bool {
        let Some((_, piece)) = self.piece_at(mv.from()) else {
            return false;
        };
        let enemy = color.opponent();

        if piece == Piece::King {
            if let Some((_, passed)) = castle_rook_squares(mv, color) {
                if self.is_square_threatened(mv.from(), enemy)
                    || self.is_square_threatened(passed, enemy)
                {
                    return false;
                }
            }
        }

        let king_sq = if piece == Piece::King {
            Some(mv.to())
        } else {
            self.king_square(color)
        };

        let after = self.speculate(*mv, color, piece);
        match king_sq {
            Some(sq) => !after.is_square_threatened(sq, enemy),
            None => true,
        }
    }

    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let color = self.side_to_move;
        self.is_in_check(color) && self.generate_legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let color = self.side_to_move;
        !self.is_in_check(color) && self.generate_legal_moves().is_empty()
    }
}
