use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::square::Square;
use crate::errors::{ChessError, ChessResult};
use crate::utils::algebraic::coords_to_square;

/// Split a 4-character long-algebraic string ("e2e4") into origin and
/// destination squares. This is also the parse used to echo externally
/// suggested moves before any validation.
pub fn parse_lan(lan: &str) -> ChessResult<(Square, Square)> {
    if !lan.is_ascii() || lan.len() != 4 {
        return Err(ChessError::InvalidLanString(lan.to_owned()));
    }

    let from = coords_to_square(&lan[0..2])?;
    let to = coords_to_square(&lan[2..4])?;
    Ok((from, to))
}

/// Resolve a long-algebraic string to the engine's own legal move, so the
/// capture snapshot matches the board. Fails with `IllegalMove` when no
/// legal move connects the two squares.
pub fn lan_to_move(board: &Board, lan: &str) -> ChessResult<Move> {
    let (from, to) = parse_lan(lan)?;
    board
        .legal_moves(from)?
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or(ChessError::IllegalMove { from, to })
}

#[cfg(test)]
mod tests {
    use super::{lan_to_move, parse_lan};
    use crate::board::board::Board;
    use crate::board::piece::{Color, PieceKind};
    use crate::errors::ChessError;
    use crate::utils::algebraic::coords_to_square;

    #[test]
    fn parse_lan_splits_origin_and_destination() {
        let (from, to) = parse_lan("e2e4").expect("e2e4 should parse");
        assert_eq!(from, coords_to_square("e2").expect("e2"));
        assert_eq!(to, coords_to_square("e4").expect("e4"));
    }

    #[test]
    fn parse_lan_rejects_malformed_strings() {
        for lan in ["", "e2", "e2e", "e2e44", "e2x4", "e9e4"] {
            assert!(parse_lan(lan).is_err(), "{lan:?} should not parse");
        }
    }

    #[test]
    fn lan_to_move_resolves_against_the_board() {
        let board = Board::new();
        let mv = lan_to_move(&board, "e2e4").expect("e2e4 should resolve");
        assert_eq!(mv.to, coords_to_square("e4").expect("e4"));
        assert!(mv.captured.is_none());
    }

    #[test]
    fn lan_to_move_carries_the_capture_snapshot() {
        let mut board = Board::new();
        for lan in ["e2e4", "d7d5"] {
            let mv = lan_to_move(&board, lan).expect("setup move should resolve");
            board.apply_move(&mv).expect("setup move should apply");
        }

        let capture = lan_to_move(&board, "e4d5").expect("e4xd5 should resolve");
        assert_eq!(
            capture.captured.map(|p| (p.color, p.kind)),
            Some((Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn lan_to_move_reports_illegal_and_empty_origins() {
        let board = Board::new();
        assert_eq!(
            lan_to_move(&board, "e2e5"),
            Err(ChessError::IllegalMove {
                from: coords_to_square("e2").expect("e2"),
                to: coords_to_square("e5").expect("e5"),
            })
        );
        assert_eq!(
            lan_to_move(&board, "e4e5"),
            Err(ChessError::OriginEmpty(coords_to_square("e4").expect("e4")))
        );
    }
}
