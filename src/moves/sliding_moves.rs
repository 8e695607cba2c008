use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::square::Square;

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (0, 1),
    (1, 0),
    (0, -1),
];

/// Shared ray-cast for bishops, rooks, and queens: along each direction
/// until the board edge, an own piece (stop, exclude), or an enemy piece
/// (include, stop).
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => {
                    out.push(Move::new(from, to));
                    current = to;
                }
                Some(target) if target.color != piece.color => {
                    out.push(Move::with_capture(from, to, *target));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
