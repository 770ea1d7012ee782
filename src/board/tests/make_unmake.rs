//! Make/unmake move tests.

use super::sq;
use crate::board::{Board, CastlingRights, Cell, Color, Move, Piece, Position};
use rand::prelude::*;

fn find_move(board: &mut Board, uci: &str) -> Move {
    let wanted: Move = uci.parse().expect("test move");
    board
        .generate_legal_moves()
        .iter()
        .copied()
        .find(|m| *m == wanted)
        .expect("Expected move not found")
}

fn play_legal(board: &mut Board, uci: &str) {
    let mv = find_move(board, uci);
    board.make_move(&mv).unwrap();
}

fn play(board: &mut Board, uci: &str) {
    let mv: Move = uci.parse().expect("test move");
    board.make_move(&mv).expect("origin holds a piece");
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = board.clone();
    let mv = find_move(&mut board, "e5f6");
    let info = board.make_move(&mv).unwrap();
    assert_eq!(info.captured(), Some((Color::Black, Piece::Pawn)));
    assert_eq!(board.piece_at(sq("f5")), None);
    assert_eq!(board.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(board.pieces(Color::Black).count(), 15);

    board.unmake_move(info);
    assert_eq!(board, original);
}

#[test]
fn test_promotion_make_unmake() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = board.clone();
    let mv = find_move(&mut board, "a7a8q");
    let info = board.make_move(&mv).unwrap();
    assert_eq!(board.piece_at(sq("a8")), Some((Color::White, Piece::Queen)));
    board.unmake_move(info);
    assert_eq!(board, original);
    assert_eq!(board.piece_at(sq("a7")), Some((Color::White, Piece::Pawn)));
}

#[test]
fn test_castling_make_unmake() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let original = board.clone();

    let mv = find_move(&mut board, "e1g1");
    let info = board.make_move(&mv).unwrap();
    assert_eq!(board.piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.cell(sq("h1")), Cell::Empty);
    assert_eq!(board.king_square(Color::White), Some(sq("g1")));
    assert_eq!(board.castling_rights().sides(Color::White), (false, false));
    assert_eq!(board.castling_rights().sides(Color::Black), (true, true));
    board.unmake_move(info);
    assert_eq!(board, original);

    play_legal(&mut board, "e1c1");
    assert_eq!(board.piece_at(sq("c1")), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert_eq!(board.cell(sq("a1")), Cell::Empty);
}

#[test]
fn test_capture_resets_clock_and_restores() {
    let mut board = Board::from_fen("4k3/8/8/3p4/4N3/8/8/4K3 w - - 7 12");
    let original = board.clone();
    let mv = find_move(&mut board, "e4d6");
    let info = board.make_move(&mv).unwrap();
    assert_eq!(board.halfmove_clock(), 8);
    board.unmake_move(info);

    let mv = find_move(&mut board, "e4c5");
    let info = board.make_move(&mv).unwrap();
    board.unmake_move(info);
    assert_eq!(board, original);

    play_legal(&mut board, "e4g5");
    play_legal(&mut board, "d5d4");
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 13);
}

#[test]
fn test_make_move_from_empty_square() {
    let mut board = Board::new();
    let original = board.clone();
    let mv: Move = "e4e5".parse().unwrap();
    assert_eq!(
        board.make_move(&mv),
        Err(crate::board::MoveError::NotAPiece { square: sq("e4") })
    );
    assert_eq!(board, original);
}

#[test]
fn test_speculation_guard_restores_on_drop() {
    let mut board = Board::new();
    let original = board.clone();
    {
        let after = board.preview(&"g1f3".parse().unwrap()).unwrap();
        assert_eq!(after.piece_at(sq("f3")), Some((Color::White, Piece::Knight)));
        assert_eq!(after.side_to_move(), Color::Black);
        assert_eq!(after.halfmove_clock(), 1);
    }
    assert_eq!(board, original);
}

#[test]
fn test_speculation_guard_restores_on_early_return() {
    fn knight_lands_on(board: &mut Board, uci: &str, target: &str) -> bool {
        let Ok(after) = board.preview(&uci.parse().unwrap()) else {
            return false;
        };
        if after.piece_at(sq(target)).is_none() {
            return false;
        }
        true
    }

    let mut board = Board::new();
    let original = board.clone();
    assert!(knight_lands_on(&mut board, "b1c3", "c3"));
    assert!(!knight_lands_on(&mut board, "b1c3", "a3"));
    assert!(!knight_lands_on(&mut board, "c3b1", "b1"));
    assert_eq!(board, original);
}

#[test]
fn test_random_playout_unwinds_exactly() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..20 {
        let mut board = Board::new();
        let original = board.clone();
        let mut history = Vec::new();
        for _ in 0..40 {
            let moves = board.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves.as_slice()[rng.gen_range(0..moves.len())];
            history.push(board.make_move(&mv).unwrap());
        }
        while let Some(info) = history.pop() {
            board.unmake_move(info);
        }
        assert_eq!(board, original);
    }
}

// Castling rights after a rook or king steps away and back

fn rights_after(moves: &[&str]) -> CastlingRights {
    let mut board = Board::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
    for uci in moves {
        play(&mut board, uci);
    }
    board.castling_rights()
}

#[test]
fn test_castle_rights_revoked_by_rook_and_king_moves() {
    let cases: [(&[&str], CastlingRights); 6] = [
        (&["a1b1", "b1a1"], CastlingRights::from_flags(true, false, true, true)),
        (&["h1f1", "f1h1"], CastlingRights::from_flags(false, true, true, true)),
        (&["e1d1", "d1e1"], CastlingRights::from_flags(false, false, true, true)),
        (&["a8b8", "b8a8"], CastlingRights::from_flags(true, true, true, false)),
        (&["h8f8", "f8h8"], CastlingRights::from_flags(true, true, false, true)),
        (&["e8d8", "d8e8"], CastlingRights::from_flags(true, true, false, false)),
    ];
    for (moves, expected) in cases {
        assert_eq!(rights_after(moves), expected, "after {moves:?}");
    }
}

#[test]
fn test_castle_right_revoked_by_rook_capture() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = find_move(&mut board, "a1a8");
    board.make_move(&mv).unwrap();
    assert_eq!(board.castling_rights(), CastlingRights::from_flags(true, false, true, false));
}

#[test]
fn test_en_passant_lifecycle() {
    let mut board = Board::new();
    play(&mut board, "a2a4");
    assert_eq!(board.en_passant_target(), Some(sq("a3")));
    play(&mut board, "a4a5");
    assert_eq!(board.en_passant_target(), None);
    play(&mut board, "h7h5");
    assert_eq!(board.en_passant_target(), Some(sq("h6")));
    play(&mut board, "h5h4");
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_promotion_selectors() {
    let cases = [
        ("a7", "a8", Some('P'), Piece::Queen),
        ("b7", "b8", Some('N'), Piece::Knight),
        ("c7", "c8", Some('B'), Piece::Bishop),
        ("d7", "d8", Some('R'), Piece::Rook),
        ("e7", "e8", Some('Q'), Piece::Queen),
        ("f7", "f8", Some('K'), Piece::Queen),
        ("g7", "g8", None, Piece::Queen),
        ("h7", "h8", Some('A'), Piece::Queen),
    ];
    for (from, to, selector, expected) in cases {
        let mut board = Board::from_fen("8/PPPPPPPP/8/8/8/8/8/8 w - - 0 1");
        let mv = Move::new(sq(from), sq(to), selector.and_then(Piece::from_char));
        board.make_move(&mv).unwrap();
        assert_eq!(
            board.piece_at(sq(to)),
            Some((Color::White, expected)),
            "promotion selector {selector:?}"
        );
    }
}

#[test]
fn test_play_unchecked_refreshes_position() {
    let mut position = Position::try_from_fen("8/PPPPPPPP/8/8/8/8/8/8 w - - 0 1").unwrap();
    position
        .play_unchecked(Move::new(sq("c7"), sq("c8"), Some(Piece::King)))
        .unwrap();
    assert_eq!(position.piece_at(sq("c8")), Some((Color::White, Piece::Queen)));
    assert_eq!(position.side_to_move(), Color::Black);
    assert!(position.legal_moves().is_empty());
}

#[test]
fn test_fullmove_number_saturates() {
    let mut position = Position::try_from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 4294967295").unwrap();
    position.make_move_uci("e8d8").unwrap();
    assert_eq!(position.fullmove_number(), u32::MAX);
    assert_eq!(position.side_to_move(), Color::White);
    position.make_move_uci("e1d1").unwrap();
    position.make_move_uci("d8e8").unwrap();
    assert_eq!(position.fullmove_number(), u32::MAX);
    assert_eq!(
        position.to_fen(),
        "4k3/8/8/8/8/8/8/3K4 w - - 3 4294967295"
    );
}
