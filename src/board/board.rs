//! Board state and the public rules API.
//!
//! `Board` owns the 8x8 grid and is the façade front ends talk to: legal
//! move enumeration, validated move application, check queries, and the
//! special-move bookkeeping (en passant flags, last-move record). The
//! actual algorithms live in `move_generation`.

use crate::board::chess_move::Move;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_apply::{apply_move_unchecked, AppliedMove};
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    last_move: Option<Move>,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.add_pieces(Color::White);
        board.add_pieces(Color::Black);
        board
    }

    /// An empty board, for tests and custom setups.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            last_move: None,
        }
    }

    fn add_pieces(&mut self, color: Color) {
        let (pawn_row, back_row) = match color {
            Color::White => (6, 7),
            Color::Black => (1, 0),
        };

        for col in 0..8 {
            self.place(
                Square::new_unchecked(pawn_row, col),
                Piece::new(color, PieceKind::Pawn),
            );
        }
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            self.place(
                Square::new_unchecked(back_row, col as i8),
                Piece::new(color, kind),
            );
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    /// Puts `piece` on `square`, replacing any occupant. Public for test
    /// and custom-position setup.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    /// Removes and returns the occupant of `square`.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// The most recent applied move, for move-trail display. Never consulted
    /// by the legality logic itself.
    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Move) {
        self.last_move = Some(mv);
    }

    /// Squares occupied by `color` pieces, in row-major scan order.
    pub fn squares_with(&self, color: Color) -> Vec<(Square, Piece)> {
        let mut out = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new_unchecked(row, col);
                if let Some(piece) = self.piece_at(square) {
                    if piece.color == color {
                        out.push((square, *piece));
                    }
                }
            }
        }
        out
    }

    /// Legal moves for the piece on `from`: a fresh list per call, with
    /// moves that would leave the mover's own king in check filtered out.
    pub fn legal_moves(&self, from: Square) -> ChessResult<Vec<Move>> {
        legal_move_generator::legal_moves(self, from)
    }

    /// True iff `mv` is in the origin piece's current legal-move set.
    pub fn valid_move(&self, mv: &Move) -> bool {
        self.legal_moves(mv.from)
            .map(|moves| moves.contains(mv))
            .unwrap_or(false)
    }

    /// Applies `mv` after re-validating it against the origin piece's legal
    /// moves. An illegal or empty-origin move is refused and the board is
    /// left untouched. Returns what the move did, for effect mapping by the
    /// caller.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<AppliedMove> {
        let legal = self.legal_moves(mv.from)?;
        let Some(resolved) = legal.iter().find(|candidate| *candidate == mv) else {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        };
        let resolved = *resolved;
        Ok(apply_move_unchecked(self, &resolved))
    }

    /// True when the `color` king is attacked.
    pub fn in_check(&self, color: Color) -> bool {
        legal_move_checks::in_check(self, color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        legal_move_checks::king_square(self, color)
    }

    /// The sole heuristic distinguishing a castling king-move from a normal
    /// one: a horizontal displacement of exactly two columns.
    #[inline]
    pub fn is_castling(from: Square, to: Square) -> bool {
        (from.col() - to.col()).abs() == 2
    }

    /// Promotes a pawn standing on the back rank at `at` to a queen of the
    /// same color. Returns whether a promotion occurred.
    pub fn check_promotion(&mut self, at: Square) -> bool {
        let Some(piece) = self.piece_at(at) else {
            return false;
        };
        if piece.kind != PieceKind::Pawn || (at.row() != 0 && at.row() != 7) {
            return false;
        }

        let mut queen = Piece::new(piece.color, PieceKind::Queen);
        queen.moved = true;
        self.place(at, queen);
        true
    }

    /// Refreshes the board-wide en-passant flags after an applied move:
    /// clears the flag on every pawn, then sets it on the pawn at `at` iff
    /// its just-applied move was a two-square advance. No effect for
    /// non-pawns. Callers must invoke this after every applied move; the
    /// `Game` wrapper does so automatically.
    pub fn set_true_en_passant(&mut self, at: Square) {
        let is_pawn = self
            .piece_at(at)
            .map(|piece| piece.kind == PieceKind::Pawn)
            .unwrap_or(false);
        if !is_pawn {
            return;
        }

        for row in &mut self.squares {
            for occupant in row.iter_mut() {
                if let Some(piece) = occupant {
                    if piece.kind == PieceKind::Pawn {
                        piece.en_passant = false;
                    }
                }
            }
        }

        let double_step = self
            .last_move
            .map(|mv| mv.to == at && (mv.from.row() - mv.to.row()).abs() == 2)
            .unwrap_or(false);
        if double_step {
            if let Some(piece) =
                self.squares[at.row() as usize][at.col() as usize].as_mut()
            {
                piece.en_passant = true;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
