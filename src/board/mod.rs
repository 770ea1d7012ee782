//! Chess rules: board state, legal move generation and game status.
//!
//! The board is a padded 10x12 mailbox, so every piece rule is a table of
//! fixed index offsets and stepping onto a border cell ends a ray. Each piece
//! kind's movement, threat test and move side effects live in one static
//! rule table.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Status};
//!
//! let mut position = Position::new();
//! assert_eq!(position.legal_moves().len(), 20);
//! position.make_move_uci("e2e4").unwrap();
//! assert_eq!(position.status(), Status::Ongoing);
//! ```

mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
mod position;
pub mod prelude;
mod rules;
mod state;
mod status;
mod types;
mod view;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::STARTING_FEN;
pub use position::Position;
pub use state::Board;
pub use status::{Status, DRAW_HALFMOVE_LIMIT};
pub use types::{
    index_to_square, square_to_index, CastlingRights, Cell, Color, Move, MoveList, Piece, Square,
    BOARD_SIZE,
};
pub use view::{BoardView, SquareView};

// Internal types exposed for advanced usage (but not in prelude)
pub use make_unmake::{Speculation, UnmakeInfo};

pub(crate) use types::PROMOTION_PIECES;
