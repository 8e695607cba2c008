use std::fmt;

use crate::errors::{ChessError, ChessResult};

/// Board coordinate. Row 0 is black's back rank (rank 8), row 7 is white's
/// back rank (rank 1); columns run from file a (0) to file h (7).
///
/// Construction is range-checked, so a `Square` value always names a real
/// square and grid lookups never go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> ChessResult<Self> {
        if Self::in_range(row, col) {
            Ok(Self { row, col })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    /// Constructs without a range check. Callers must have validated the
    /// coordinates.
    #[inline]
    pub(crate) const fn new_unchecked(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_range(row: i8, col: i8) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// The square offset by (d_row, d_col), or `None` when the result
    /// leaves the board. Every movement geometry goes through this guard
    /// before any grid lookup.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row + d_row;
        let col = self.col + d_col;
        if Self::in_range(row, col) {
            Some(Square { row, col })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col as u8), 8 - self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::errors::ChessError;

    #[test]
    fn new_rejects_out_of_range_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessError::OutOfBounds { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(0, -1),
            Err(ChessError::OutOfBounds { row: 0, col: -1 })
        );
    }

    #[test]
    fn offset_stops_at_the_board_edge() {
        let corner = Square::new(0, 0).expect("a8 should construct");
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());

        let inner = corner.offset(1, 1).expect("b7 should be in range");
        assert_eq!((inner.row(), inner.col()), (1, 1));
    }

    #[test]
    fn display_uses_file_and_rank() {
        assert_eq!(Square::new(7, 4).expect("e1").to_string(), "e1");
        assert_eq!(Square::new(0, 0).expect("a8").to_string(), "a8");
        assert_eq!(Square::new(4, 4).expect("e4").to_string(), "e4");
    }
}
