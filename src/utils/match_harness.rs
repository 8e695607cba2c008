//! Seeded random self-play harness for engine-level smoke testing.
//!
//! Plays uniformly random legal moves through the `Game` wrapper and
//! asserts after every ply that the mover was not left in check, which is
//! the engine's core legality invariant. The game ends at the ply cap or
//! when the side to move has no legal moves; the ending is not classified.

use chrono::{DateTime, Local};
use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::piece::Color;
use crate::errors::ChessResult;
use crate::game::Game;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0x5EED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub started_at: DateTime<Local>,
    pub moves_lan: Vec<String>,
    pub plies: u16,
    pub final_board: Board,
}

/// Every legal move available to `color`, in board scan order.
pub fn all_legal_moves(board: &Board, color: Color) -> ChessResult<Vec<Move>> {
    let mut out = Vec::new();
    for (square, _) in board.squares_with(color) {
        out.extend(board.legal_moves(square)?);
    }
    Ok(out)
}

/// Play one random self-play game under `config`.
pub fn play_random_match(config: &MatchConfig) -> ChessResult<MatchReport> {
    let started_at = Local::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = Game::new();
    let mut moves_lan = Vec::new();

    for ply in 0..config.max_plies {
        let mover = game.next_player();
        let candidates = all_legal_moves(game.board(), mover)?;
        let Some(mv) = candidates.as_slice().choose(&mut rng) else {
            debug!("no legal moves for {mover:?} after {ply} plies");
            break;
        };
        let mv = *mv;

        game.play(mv.from, mv.to)?;
        assert!(
            !game.board().in_check(mover),
            "random harness left {mover:?} in check after {mv}"
        );
        moves_lan.push(mv.to_string());
    }

    debug!(
        "random match finished: {} plies from seed {}",
        moves_lan.len(),
        config.seed
    );

    Ok(MatchReport {
        started_at,
        plies: moves_lan.len() as u16,
        moves_lan,
        final_board: game.board().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::{play_random_match, MatchConfig};

    #[test]
    fn a_default_match_plays_and_records_every_ply() {
        let config = MatchConfig::default();
        let report = play_random_match(&config).expect("match should run");
        assert!(report.plies > 0, "the opening position has 20 legal moves");
        assert!(report.plies <= config.max_plies);
        assert_eq!(report.plies as usize, report.moves_lan.len());
    }

    #[test]
    fn the_same_seed_reproduces_the_same_game() {
        let config = MatchConfig {
            max_plies: 60,
            seed: 42,
        };
        let first = play_random_match(&config).expect("first match should run");
        let second = play_random_match(&config).expect("second match should run");

        assert_eq!(first.moves_lan, second.moves_lan);
        assert_eq!(first.final_board, second.final_board);
    }
}
