pub mod board;

pub use board::{Board, Color, Move, Piece, Position, Square, Status};
