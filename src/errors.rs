//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board queries, move
//! application, and notation parsing. Variants carry the offending
//! coordinate or token where useful so callers can log or display precise
//! diagnostics.

use std::error::Error;
use std::fmt;

use crate::board::piece::Color;
use crate::board::square::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A coordinate outside the 8x8 grid was requested.
    ///
    /// Payload: the offending (row, col) pair.
    OutOfBounds { row: i8, col: i8 },

    /// A query or move application named an origin square with no piece on
    /// it.
    OriginEmpty(Square),

    /// The attempted move is not in the origin piece's legal-move set.
    ///
    /// `Board::apply_move` refuses such moves and leaves the board
    /// untouched.
    IllegalMove { from: Square, to: Square },

    /// A move was attempted by the side not on turn.
    WrongColor(Color),

    /// A coordinate string such as "e4" failed to parse.
    InvalidCoordinate(String),

    /// A long-algebraic move string such as "e2e4" failed to parse.
    InvalidLanString(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfBounds { row, col } => {
                write!(f, "coordinate out of bounds: ({row}, {col})")
            }
            ChessError::OriginEmpty(square) => write!(f, "no piece on {square}"),
            ChessError::IllegalMove { from, to } => {
                write!(f, "illegal move: {from}{to}")
            }
            ChessError::WrongColor(color) => write!(f, "{color:?} is not on turn"),
            ChessError::InvalidCoordinate(coords) => {
                write!(f, "invalid coordinate string: {coords}")
            }
            ChessError::InvalidLanString(lan) => {
                write!(f, "invalid long algebraic move: {lan}")
            }
        }
    }
}

impl Error for ChessError {}
