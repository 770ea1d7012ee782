use std::str::FromStr;

use super::error::{FenError, MoveError};
use super::{Board, CastlingRights, Color, Move, Piece, Position, Square};

/// FEN of the standard initial position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// All six fields are required and validated before any state is built.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let [placement, active, castling, en_passant, halfmove, fullmove] = parts[..] else {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        };

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRankCount { found: rows.len() });
        }

        let mut placed = Vec::with_capacity(32);
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx;
            let mut file = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if let Some(sq) = Square::new(file, rank) {
                        placed.push((sq, color, piece));
                    }
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        let side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castling_rights = CastlingRights::from_fen_field(castling)
            .map_err(|c| FenError::InvalidCastling { char: c })?;

        let en_passant_target = match en_passant {
            "-" => None,
            field => Some(field.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: field.to_string(),
            })?),
        };

        let halfmove_clock = halfmove
            .parse::<u32>()
            .ok()
            .filter(|n| *n <= 100)
            .ok_or_else(|| FenError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;

        let fullmove_number = fullmove
            .parse::<u32>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| FenError::InvalidFullmoveNumber {
                found: fullmove.to_string(),
            })?;

        let mut board = Board::empty();
        for (sq, color, piece) in placed {
            board.place(sq, color, piece);
        }
        board.side_to_move = side_to_move;
        board.castling_rights = castling_rights;
        board.en_passant_target = en_passant_target;
        board.halfmove_clock = halfmove_clock;
        board.fullmove_number = fullmove_number;
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let occupant = Square::new(file, rank).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = occupant {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

impl Position {
    /// Parse a position from FEN notation and compute its legal moves and status.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        Board::try_from_fen(fen).map(Position::from_board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    #[must_use]
    pub fn to_fen(&self) -> String {
        self.board().to_fen()
    }

    /// Decode a move in coordinate notation (e.g. "e2e4", "e7e8q") and check
    /// it against the legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveError> {
        let mv: Move = notation.parse()?;
        if self.is_legal(&mv) {
            Ok(mv)
        } else {
            Err(MoveError::Illegal { mv })
        }
    }

    /// Decode and play a move in one call. The position is left untouched on
    /// any error.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Position;
    ///
    /// let mut position = Position::new();
    /// position.make_move_uci("e2e4").unwrap();
    /// position.make_move_uci("e7e5").unwrap();
    /// ```
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Move, MoveError> {
        let mv: Move = notation.parse()?;
        self.make_move(mv)?;
        Ok(mv)
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
