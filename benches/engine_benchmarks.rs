//! Benchmarks for move generation and position handling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, Position, STARTING_FEN};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut board = Board::new();

    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let mut kiwipete = Board::from_fen(KIWIPETE);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_legal_moves()))
    });

    let mut middlegame =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.generate_legal_moves()))
    });

    let mut kiwipete = Board::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.generate_legal_moves()))
    });

    group.finish();
}

fn bench_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("position");

    group.bench_function("from_fen", |b| {
        b.iter(|| Position::try_from_fen(black_box(KIWIPETE)))
    });

    let position = Position::from_fen(KIWIPETE);
    group.bench_function("to_fen", |b| b.iter(|| black_box(position.to_fen())));

    group.bench_function("play_opening", |b| {
        b.iter(|| {
            let mut position = Position::from_fen(STARTING_FEN);
            for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
                let _ = position.make_move_uci(black_box(mv));
            }
            position
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_position);
criterion_main!(benches);
