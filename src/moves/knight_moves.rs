use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::square::Square;

pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Pseudo-legal knight candidates: the eight L-offsets onto empty-or-enemy
/// squares.
pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    for (d_row, d_col) in KNIGHT_DELTAS {
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
