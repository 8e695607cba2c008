use crate::board::board::Board;
use crate::board::piece::{Color, PieceKind};
use crate::board::square::Square;
use crate::move_generation::legal_move_generator::pseudo_moves;

/// Locates the `color` king, if present.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .squares_with(color)
        .into_iter()
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// True when any `attacker_color` piece attacks `target`. Pawns attack
/// their two diagonal squares whether or not those are occupied; every
/// other kind attacks the destinations of its raw candidate moves.
/// Castling candidates are excluded (a castling king move threatens
/// nothing), which also keeps this query non-recursive.
pub fn is_square_attacked(board: &Board, target: Square, attacker_color: Color) -> bool {
    let mut candidates = Vec::new();
    for (square, piece) in board.squares_with(attacker_color) {
        if piece.kind == PieceKind::Pawn {
            let dir = piece.color.pawn_dir();
            if square.offset(dir, -1) == Some(target) || square.offset(dir, 1) == Some(target) {
                return true;
            }
            continue;
        }

        candidates.clear();
        pseudo_moves(board, square, piece, false, &mut candidates);
        if candidates.iter().any(|mv| mv.to == target) {
            return true;
        }
    }
    false
}

/// True when the `color` king is attacked. This is the termination
/// predicate of move simulation; it never filters by self-check, so it
/// cannot recurse. A board with no `color` king (test setups) reports
/// false.
pub fn in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(king) => is_square_attacked(board, king, color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{in_check, is_square_attacked, king_square};
    use crate::board::board::Board;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::square::Square;
    use crate::utils::algebraic::coords_to_square;

    fn sq(coords: &str) -> Square {
        coords_to_square(coords).expect("test coordinate should parse")
    }

    #[test]
    fn rook_on_an_open_file_gives_check() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(Color::White, PieceKind::King));
        board.place(sq("e8"), Piece::new(Color::Black, PieceKind::Rook));

        assert!(in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }

    #[test]
    fn an_interposed_piece_blocks_the_check() {
        let mut board = Board::empty();
        board.place(sq("e1"), Piece::new(Color::White, PieceKind::King));
        board.place(sq("e2"), Piece::new(Color::White, PieceKind::Pawn));
        board.place(sq("e8"), Piece::new(Color::Black, PieceKind::Rook));

        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn pawn_attacks_are_diagonal_only() {
        let mut board = Board::empty();
        board.place(sq("e4"), Piece::new(Color::White, PieceKind::Pawn));

        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
    }

    #[test]
    fn missing_king_reports_no_check() {
        let board = Board::empty();
        assert_eq!(king_square(&board, Color::White), None);
        assert!(!in_check(&board, Color::White));
    }

    #[test]
    fn startpos_is_quiet() {
        let board = Board::new();
        assert!(!in_check(&board, Color::White));
        assert!(!in_check(&board, Color::Black));
    }
}
