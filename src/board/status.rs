use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;

/// Halfmove clock value at which a game is declared drawn (fifty full moves).
pub const DRAW_HALFMOVE_LIMIT: u32 = 100;

/// Outcome state of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw,
}

impl Status {
    /// Classify a position from its legal move count, check state and clock.
    #[must_use]
    pub fn classify(
        side_to_move: Color,
        has_legal_moves: bool,
        in_check: bool,
        halfmove_clock: u32,
    ) -> Status {
        if !has_legal_moves {
            if in_check {
                Status::Checkmate {
                    winner: side_to_move.opponent(),
                }
            } else {
                Status::Stalemate
            }
        } else if halfmove_clock >= DRAW_HALFMOVE_LIMIT {
            Status::Draw
        } else {
            Status::Ongoing
        }
    }

    /// True for checkmate, stalemate and draw
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::Ongoing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Status::Stalemate => write!(f, "stalemate"),
            Status::Draw => write!(f, "draw"),
        }
    }
}
