//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status(), Status::Ongoing);
//! ```

pub use super::{
    Board, CastlingRights, Color, FenError, Move, MoveError, MoveParseError, Piece, Position,
    Square, SquareError, Status,
};
