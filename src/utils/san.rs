//! Standard algebraic notation rendering for long-algebraic sequences.
//!
//! Replays a whitespace-separated line of long-algebraic moves ("e2e4 e7e5
//! g1f3") from the starting position and renders each move in SAN for
//! display and logging: piece letter, minimal disambiguation, `x` for
//! captures, `=Q` for promotion, `O-O`/`O-O-O` for castling, and a
//! trailing `+` when the move gives check. `#` is never emitted; mate
//! detection is outside this engine's scope.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_apply::apply_move_unchecked;
use crate::utils::algebraic::square_to_coords;
use crate::utils::long_algebraic::lan_to_move;

/// Render one move in SAN. `board` is the position before the move.
pub fn move_to_san(board: &Board, mv: &Move) -> ChessResult<String> {
    let piece = *board
        .piece_at(mv.from)
        .ok_or(ChessError::OriginEmpty(mv.from))?;

    let mut san = String::new();

    if piece.kind == PieceKind::King && Board::is_castling(mv.from, mv.to) {
        san.push_str(if mv.to.col() == 6 { "O-O" } else { "O-O-O" });
    } else {
        let is_capture = board.piece_at(mv.to).is_some()
            || (piece.kind == PieceKind::Pawn && mv.from.col() != mv.to.col());

        if let Some(letter) = piece.kind.letter() {
            san.push(letter);
            san.push_str(&disambiguation(board, mv, piece)?);
        } else if is_capture {
            // Pawn captures carry the origin file.
            san.push(char::from(b'a' + mv.from.col() as u8));
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&square_to_coords(mv.to));

        if piece.kind == PieceKind::Pawn && (mv.to.row() == 0 || mv.to.row() == 7) {
            san.push_str("=Q");
        }
    }

    let mut next = board.clone();
    apply_move_unchecked(&mut next, mv);
    if next.in_check(piece.color.opposite()) {
        san.push('+');
    }

    Ok(san)
}

/// Replay a whitespace-separated long-algebraic line from the starting
/// position and return its SAN rendering, for example "e2e4 e7e5 g1f3" →
/// "e4 e5 Nf3".
pub fn game_to_san(lan_line: &str) -> ChessResult<String> {
    let mut board = Board::new();
    let mut turn = Color::White;
    let mut rendered = Vec::new();

    for token in lan_line.split_whitespace() {
        let mv = lan_to_move(&board, token)?;
        let piece = *board
            .piece_at(mv.from)
            .ok_or(ChessError::OriginEmpty(mv.from))?;
        if piece.color != turn {
            return Err(ChessError::WrongColor(piece.color));
        }

        rendered.push(move_to_san(&board, &mv)?);
        board.apply_move(&mv)?;
        board.set_true_en_passant(mv.to);
        turn = turn.opposite();
    }

    Ok(rendered.join(" "))
}

/// Minimal SAN disambiguation for `mv`: empty when no other piece of the
/// same kind and color can reach the destination, otherwise the origin
/// file, the origin rank, or both.
fn disambiguation(board: &Board, mv: &Move, piece: Piece) -> ChessResult<String> {
    let mut rivals = Vec::new();
    for (square, other) in board.squares_with(piece.color) {
        if square == mv.from || other.kind != piece.kind {
            continue;
        }
        if board.legal_moves(square)?.iter().any(|m| m.to == mv.to) {
            rivals.push(square);
        }
    }
    if rivals.is_empty() {
        return Ok(String::new());
    }

    let coords = square_to_coords(mv.from);
    if rivals.iter().all(|square| square.col() != mv.from.col()) {
        Ok(coords[0..1].to_owned())
    } else if rivals.iter().all(|square| square.row() != mv.from.row()) {
        Ok(coords[1..2].to_owned())
    } else {
        Ok(coords)
    }
}
