//! Candidate generation and the simulate-and-filter legality pipeline.
//!
//! Geometric candidates come from the per-kind generators in `moves`; each
//! surviving candidate is then applied to a cloned board and kept only when
//! the mover's own king is not left in check. The whole-board clone per
//! candidate is deliberate: it honors pins and discovered checks without
//! any auxiliary attack-map state.

use log::debug;

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::move_generation::legal_move_checks::in_check;
use crate::moves::king_moves::{generate_castling_moves, generate_king_steps};
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::{generate_sliding_moves, BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};

/// Geometric candidates for the piece on `from`, no self-check filtering.
/// `include_castling` is false for attack scans; a castling king move
/// threatens nothing, and excluding it breaks the scan's recursion cycle.
pub fn pseudo_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    include_castling: bool,
    out: &mut Vec<Move>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_sliding_moves(board, from, piece, &BISHOP_DIRS, out),
        PieceKind::Rook => generate_sliding_moves(board, from, piece, &ROOK_DIRS, out),
        PieceKind::Queen => generate_sliding_moves(board, from, piece, &QUEEN_DIRS, out),
        PieceKind::King => {
            generate_king_steps(board, from, piece, out);
            if include_castling {
                generate_castling_moves(board, from, piece, out);
            }
        }
    }
}

/// Legal moves for the piece on `from`: every geometric candidate that
/// does not leave the mover's own king in check. Returns a fresh list per
/// call; nothing is cached on the piece.
pub fn legal_moves(board: &Board, from: Square) -> ChessResult<Vec<Move>> {
    let piece = *board
        .piece_at(from)
        .ok_or(ChessError::OriginEmpty(from))?;

    let mut candidates = Vec::new();
    pseudo_moves(board, from, piece, true, &mut candidates);
    let generated = candidates.len();

    candidates.retain(|mv| {
        let mut simulated = board.clone();
        apply_move_unchecked(&mut simulated, mv);
        !in_check(&simulated, piece.color)
    });

    debug!(
        "legal_moves {from}: {} of {generated} candidates survive self-check",
        candidates.len()
    );
    Ok(candidates)
}
