//! Turn-tracking wrapper around `Board` for interactive callers.
//!
//! Carries the side to move and the long-algebraic move history, and keeps
//! the board's en-passant bookkeeping current so front ends only need the
//! one call per user action.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::Color;
use crate::board::square::Square;
use crate::errors::{ChessError, ChessResult};
use crate::move_generation::legal_move_apply::AppliedMove;
use crate::utils::algebraic::square_to_coords;
use crate::utils::long_algebraic::parse_lan;
use crate::utils::san::game_to_san;

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    next_player: Color,
    history: Vec<String>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Color::White,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn next_player(&self) -> Color {
        self.next_player
    }

    /// The applied moves so far, in long algebraic notation.
    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Apply a move for the side on turn. Refreshes the en-passant flags,
    /// flips the turn, and records the move on success.
    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<AppliedMove> {
        let piece = self
            .board
            .piece_at(from)
            .copied()
            .ok_or(ChessError::OriginEmpty(from))?;
        if piece.color != self.next_player {
            return Err(ChessError::WrongColor(piece.color));
        }

        let applied = self.board.apply_move(&Move::new(from, to))?;
        self.board.set_true_en_passant(to);
        self.next_player = self.next_player.opposite();
        self.history
            .push(format!("{}{}", square_to_coords(from), square_to_coords(to)));
        Ok(applied)
    }

    /// `play`, with the move given in long algebraic notation ("e2e4").
    pub fn play_lan(&mut self, lan: &str) -> ChessResult<AppliedMove> {
        let (from, to) = parse_lan(lan)?;
        self.play(from, to)
    }

    /// The move history rendered in standard algebraic notation.
    pub fn san_history(&self) -> ChessResult<String> {
        game_to_san(&self.history.join(" "))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::board::piece::Color;
    use crate::errors::ChessError;
    use crate::utils::algebraic::coords_to_square;

    #[test]
    fn turns_alternate_and_out_of_turn_moves_are_refused() {
        let mut game = Game::new();
        assert_eq!(game.next_player(), Color::White);

        assert_eq!(
            game.play_lan("e7e5"),
            Err(ChessError::WrongColor(Color::Black))
        );

        game.play_lan("e2e4").expect("e2e4 should apply");
        assert_eq!(game.next_player(), Color::Black);
        game.play_lan("e7e5").expect("e7e5 should apply");
        assert_eq!(game.next_player(), Color::White);
    }

    #[test]
    fn history_records_lan_and_renders_san() {
        let mut game = Game::new();
        game.play_lan("e2e4").expect("e2e4 should apply");
        game.play_lan("e7e5").expect("e7e5 should apply");
        game.play_lan("g1f3").expect("g1f3 should apply");

        assert_eq!(game.history(), ["e2e4", "e7e5", "g1f3"]);
        assert_eq!(
            game.san_history().expect("history should render"),
            "e4 e5 Nf3"
        );
    }

    #[test]
    fn a_failed_move_changes_nothing() {
        let mut game = Game::new();
        assert!(game.play_lan("e2e5").is_err());

        assert_eq!(game.next_player(), Color::White);
        assert!(game.history().is_empty());
        assert!(game
            .board()
            .piece_at(coords_to_square("e2").expect("e2"))
            .is_some());
    }

    #[test]
    fn reset_restores_the_starting_state() {
        let mut game = Game::new();
        game.play_lan("e2e4").expect("e2e4 should apply");
        game.reset();

        assert_eq!(game.next_player(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.board(), &crate::board::board::Board::new());
    }

    #[test]
    fn applied_move_flags_reach_the_caller() {
        let mut game = Game::new();
        game.play_lan("e2e4").expect("e2e4 should apply");
        game.play_lan("d7d5").expect("d7d5 should apply");
        let applied = game.play_lan("e4d5").expect("e4xd5 should apply");

        assert!(applied.capture);
        assert!(!applied.en_passant);
    }
}
