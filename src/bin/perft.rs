//! Perft divide for checking move generation against reference counts.
//!
//! Usage: `perft [depth] [fen...]`. Defaults to depth 4 from the start position.

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use chess_rules::board::{Board, STARTING_FEN};

const DEFAULT_DEPTH: usize = 4;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let depth = match args.first() {
        Some(arg) => match arg.parse::<usize>() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("usage: perft [depth] [fen...]");
                return ExitCode::FAILURE;
            }
        },
        None => DEFAULT_DEPTH,
    };

    let fen = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        STARTING_FEN.to_string()
    };

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let divide = board.perft_divide(depth);
    let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
    let elapsed = start.elapsed();

    for (mv, nodes) in &divide {
        println!("{mv}: {nodes}");
    }
    println!();
    println!("perft({depth}) = {total}");
    println!("time: {:.3}s", elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
