use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::PieceKind;
use crate::board::square::Square;

/// What an applied move did. Callers map these flags to sounds or
/// animation; the engine itself performs no I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub capture: bool,
    pub en_passant: bool,
    pub castling: bool,
    pub promotion: bool,
}

/// Applies `mv` without a legality check. `Board::apply_move` validates
/// first; the legality filter runs this directly on cloned boards.
pub(crate) fn apply_move_unchecked(board: &mut Board, mv: &Move) -> AppliedMove {
    let mut applied = AppliedMove::default();

    let destination_was_empty = board.piece_at(mv.to).is_none();
    let Some(mut piece) = board.remove(mv.from) else {
        debug_assert!(false, "apply_move_unchecked on empty origin {}", mv.from);
        return applied;
    };
    applied.capture = !destination_was_empty;

    // En passant: a pawn arriving diagonally on an empty square captures
    // the pawn beside its origin on the destination file.
    if piece.kind == PieceKind::Pawn && mv.from.col() != mv.to.col() && destination_was_empty {
        board.remove(Square::new_unchecked(mv.from.row(), mv.to.col()));
        applied.capture = true;
        applied.en_passant = true;
    }

    piece.moved = true;
    board.place(mv.to, piece);

    if piece.kind == PieceKind::Pawn {
        applied.promotion = board.check_promotion(mv.to);
    }

    // Castling: a two-column king move relocates the matching rook.
    if piece.kind == PieceKind::King && Board::is_castling(mv.from, mv.to) {
        let (corner_col, rook_col) = if mv.to.col() < mv.from.col() {
            (0, 3)
        } else {
            (7, 5)
        };
        if let Some(mut rook) = board.remove(Square::new_unchecked(mv.from.row(), corner_col)) {
            rook.moved = true;
            board.place(Square::new_unchecked(mv.from.row(), rook_col), rook);
        }
        applied.castling = true;
    }

    board.set_last_move(*mv);
    applied
}
