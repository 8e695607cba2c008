use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::{Piece, PieceKind};
use crate::board::square::Square;
use crate::move_generation::legal_move_checks::is_square_attacked;

pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Single-square king steps onto empty-or-enemy squares.
pub fn generate_king_steps(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KING_DELTAS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(Move::new(from, to)),
            Some(target) if target.color != piece.color => {
                out.push(Move::with_capture(from, to, *target));
            }
            Some(_) => {}
        }
    }
}

// (rook corner column, king destination column) per castling side.
const CASTLING_SIDES: [(i8, i8); 2] = [(0, 2), (7, 6)];

/// Castling candidates: unmoved king not currently in check, an unmoved
/// same-color rook on the corner square, every square strictly between
/// them empty, and the squares the king crosses unattacked. The rook is
/// resolved by corner lookup, never by stored references.
pub fn generate_castling_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    // Castling is only defined from the king's home column.
    if piece.moved || from.col() != 4 {
        return;
    }
    let enemy = piece.color.opposite();
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for (rook_col, king_col) in CASTLING_SIDES {
        let corner = Square::new_unchecked(from.row(), rook_col);
        let Some(rook) = board.piece_at(corner) else {
            continue;
        };
        if rook.kind != PieceKind::Rook || rook.color != piece.color || rook.moved {
            continue;
        }

        let (lo, hi) = if rook_col < from.col() {
            (rook_col + 1, from.col())
        } else {
            (from.col() + 1, rook_col)
        };
        let path_clear = (lo..hi)
            .all(|col| board.piece_at(Square::new_unchecked(from.row(), col)).is_none());
        if !path_clear {
            continue;
        }

        // Squares the king crosses, destination included.
        let step: i8 = if king_col < from.col() { -1 } else { 1 };
        let mut col = from.col() + step;
        let mut safe = true;
        loop {
            if is_square_attacked(board, Square::new_unchecked(from.row(), col), enemy) {
                safe = false;
                break;
            }
            if col == king_col {
                break;
            }
            col += step;
        }

        if safe {
            out.push(Move::new(from, Square::new_unchecked(from.row(), king_col)));
        }
    }
}
