use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

use super::error::MoveError;
use super::make_unmake::Speculation;
use super::status::Status;
use super::{Board, CastlingRights, Color, Move, MoveList, Piece, Square};

static STARTING_POSITION: Lazy<Position> = Lazy::new(|| Position::from_board(Board::new()));

/// A game position: the board plus its legal moves and status.
///
/// The legal move set and status are recomputed after every committed move,
/// so they always describe the current board. `Position` does no locking; a
/// caller sharing one between threads must serialize writes per game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    legal_moves: HashSet<Move>,
    status: Status,
}

impl Position {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    /// Wrap a board, computing its legal moves and status.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut position = Position {
            board,
            legal_moves: HashSet::new(),
            status: Status::Ongoing,
        };
        position.refresh();
        position
    }

    fn refresh(&mut self) {
        let color = self.board.side_to_move();
        self.legal_moves = self.board.generate_legal_moves().into_iter().collect();
        self.status = Status::classify(
            color,
            !self.legal_moves.is_empty(),
            self.board.is_in_check(color),
            self.board.halfmove_clock(),
        );
        #[cfg(feature = "logging")]
        if self.status.is_terminal() {
            log::info!("position {} is {}", self.board.to_fen(), self.status);
        }
    }

    /// Play a legal move.
    ///
    /// Moves outside the legal set are rejected with [`MoveError::Illegal`]
    /// and leave the position unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves.contains(&mv) {
            #[cfg(feature = "logging")]
            log::debug!("rejected illegal move {mv} in {}", self.board.to_fen());
            return Err(MoveError::Illegal { mv });
        }
        self.board.make_move(&mv)?;
        #[cfg(feature = "logging")]
        log::debug!("played {mv}");
        self.refresh();
        Ok(())
    }

    /// Apply a move without checking it against the legal set.
    ///
    /// The mover is whatever stands on the origin square. Errors only when
    /// the origin is empty.
    pub fn play_unchecked(&mut self, mv: Move) -> Result<(), MoveError> {
        self.board.make_move(&mv)?;
        self.refresh();
        Ok(())
    }

    /// Apply a legal move for as long as the returned guard lives.
    pub fn preview(&mut self, mv: &Move) -> Result<Speculation<'_>, MoveError> {
        if !self.legal_moves.contains(mv) {
            return Err(MoveError::Illegal { mv: *mv });
        }
        self.board.preview(mv)
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Legal moves for the side to move
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> &HashSet<Move> {
        &self.legal_moves
    }

    /// Legal moves in coordinate notation, sorted
    #[must_use]
    pub fn legal_moves_uci(&self) -> Vec<String> {
        let mut moves: Vec<String> = self.legal_moves.iter().map(|mv| mv.to_uci()).collect();
        moves.sort();
        moves
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, Status::Checkmate { .. })
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status == Status::Stalemate
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.status == Status::Draw
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.board.side_to_move())
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.board.castling_rights()
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target()
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock()
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.board.fullmove_number()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn pseudolegal_moves_from(&self, from: Square) -> MoveList {
        self.board.pseudolegal_moves_from(from)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        self.board.clone().perft(depth)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl From<Board> for Position {
    fn from(board: Board) -> Self {
        Position::from_board(board)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .filter_map(|file| Square::new(file, rank))
                .map(|sq| self.board.cell(sq).to_char().to_string())
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_position() {
        let position = Position::new();
        assert_eq!(position.legal_moves().len(), 20);
        assert_eq!(position.status(), Status::Ongoing);
        assert_eq!(position.side_to_move(), Color::White);
    }

    #[test]
    fn test_legal_moves_uci_sorted() {
        let position = Position::new();
        let moves = position.legal_moves_uci();
        assert_eq!(moves.first().map(String::as_str), Some("a2a3"));
        assert_eq!(moves.last().map(String::as_str), Some("h2h4"));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_illegal_move_leaves_position() {
        let mut position = Position::new();
        let before = position.clone();
        let mv: Move = "e2e5".parse().unwrap();
        assert_eq!(position.make_move(mv), Err(MoveError::Illegal { mv }));
        assert_eq!(position, before);
    }

    #[test]
    fn test_caches_follow_moves() {
        let mut position = Position::new();
        position.make_move("f2f3".parse().unwrap()).unwrap();
        position.make_move("e7e5".parse().unwrap()).unwrap();
        position.make_move("g2g4".parse().unwrap()).unwrap();
        position.make_move("d8h4".parse().unwrap()).unwrap();
        assert!(position.is_checkmate());
        assert!(position.is_in_check());
        assert!(position.legal_moves().is_empty());
        assert_eq!(
            position.status(),
            Status::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn test_stalemate() {
        let position = Position::try_from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(position.is_stalemate());
        assert!(!position.is_in_check());
    }

    #[test]
    fn test_draw_at_halfmove_limit() {
        let position = Position::try_from_fen("8/8/4k3/8/8/4K3/8/8 w - - 100 80").unwrap();
        assert!(position.is_draw());
        let position = Position::try_from_fen("8/8/4k3/8/8/4K3/8/8 w - - 99 80").unwrap();
        assert_eq!(position.status(), Status::Ongoing);
    }

    #[test]
    fn test_draw_after_quiet_move() {
        let mut position = Position::try_from_fen("8/8/4k3/8/8/4K3/8/8 w - - 99 80").unwrap();
        position.make_move_uci("e3e4").unwrap();
        assert_eq!(position.halfmove_clock(), 100);
        assert!(position.is_draw());
    }

    #[test]
    fn test_preview_restores() {
        let mut position = Position::new();
        let before = position.clone();
        let mv: Move = "e2e4".parse().unwrap();
        {
            let preview = position.preview(&mv).unwrap();
            assert_eq!(preview.side_to_move(), Color::Black);
            assert_eq!(preview.en_passant_target(), Some("e3".parse().unwrap()));
        }
        assert_eq!(position, before);
        assert!(position.preview(&"e2e5".parse().unwrap()).is_err());
    }

    #[test]
    fn test_display_diagram() {
        let diagram = Position::new().to_string();
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[4], ". . . . . . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }
}
