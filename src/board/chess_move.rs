use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::piece::Piece;
use crate::board::square::Square;

/// A move between two squares, with the captured piece (if any) frozen at
/// move-creation time.
///
/// Equality and hashing consider the coordinates only; the capture payload
/// is informational and rides along for callers that need it (display,
/// replay records).
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    pub const fn with_capture(from: Square, to: Square, captured: Piece) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
