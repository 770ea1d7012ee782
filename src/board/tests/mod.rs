//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts against reference positions
//! - `draw.rs` - Halfmove clock and draw detection
//! - `make_unmake.rs` - Make/unmake move correctness and move side effects
//! - `movegen.rs` - Per-piece pseudolegal tables and threat detection
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod make_unmake;

use std::collections::HashSet;

use crate::board::{Move, Square};

/// Parse a square name, panicking on bad test input
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("test square")
}

/// Moves from `origin` to each of `dests`, without promotion
pub(super) fn moves_to(origin: &str, dests: &[&str]) -> HashSet<Move> {
    dests
        .iter()
        .map(|dest| Move::quiet(sq(origin), sq(dest)))
        .collect()
}
