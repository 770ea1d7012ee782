//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - a playing square on the padded 10x12 board
//! - `Cell` - occupant of one board cell, including border sentinels
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod cell;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use cell::Cell;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::{index_to_square, square_to_index, Square, BOARD_SIZE};

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
