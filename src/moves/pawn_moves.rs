use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;

/// Pseudo-legal pawn candidates: pushes, diagonal captures, en passant.
pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let dir = piece.color.pawn_dir();

    // Forward pushes, two squares while unmoved, stopping at the first
    // occupied square.
    let steps = if piece.moved { 1 } else { 2 };
    for step in 1..=steps {
        let Some(to) = from.offset(dir * step, 0) else {
            break;
        };
        if board.piece_at(to).is_some() {
            break;
        }
        out.push(Move::new(from, to));
    }

    // Diagonal captures.
    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != piece.color {
                out.push(Move::with_capture(from, to, *target));
            }
        }
    }

    // En passant: mover on its capture row, adjacent enemy pawn flagged
    // from its two-square advance, landing on the empty square behind it.
    if from.row() == piece.color.en_passant_row() {
        for d_col in [-1, 1] {
            let Some(beside) = from.offset(0, d_col) else {
                continue;
            };
            let Some(adjacent) = board.piece_at(beside) else {
                continue;
            };
            if adjacent.color == piece.color
                || adjacent.kind != PieceKind::Pawn
                || !adjacent.en_passant
            {
                continue;
            }
            if let Some(to) = from.offset(dir, d_col) {
                if board.piece_at(to).is_none() {
                    out.push(Move::with_capture(from, to, *adjacent));
                }
            }
        }
    }
}
