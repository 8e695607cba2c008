//! Coordinate-string conversions for long algebraic notation.
//!
//! Converts between human-readable coordinates (for example, `e4`) and the
//! engine's row/col squares, reused by the LAN and SAN components.

use crate::board::square::Square;
use crate::errors::{ChessError, ChessResult};

/// Convert a coordinate string (for example "e4") to a square.
#[inline]
pub fn coords_to_square(coords: &str) -> ChessResult<Square> {
    let bytes = coords.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidCoordinate(coords.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidCoordinate(coords.to_owned()));
    }

    // Row 0 is rank 8.
    Ok(Square::new_unchecked(
        (b'8' - rank) as i8,
        (file - b'a') as i8,
    ))
}

/// Convert a square to its coordinate string (for example "e4").
#[inline]
pub fn square_to_coords(square: Square) -> String {
    format!(
        "{}{}",
        char::from(b'a' + square.col() as u8),
        8 - square.row()
    )
}

#[cfg(test)]
mod tests {
    use super::{coords_to_square, square_to_coords};
    use crate::errors::ChessError;

    #[test]
    fn round_trip_corner_and_center_squares() {
        for coords in ["a1", "a8", "h1", "h8", "e4"] {
            let square = coords_to_square(coords).expect("coordinate should parse");
            assert_eq!(square_to_coords(square), coords);
        }
    }

    #[test]
    fn orientation_puts_rank_eight_on_row_zero() {
        let a8 = coords_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));

        let e1 = coords_to_square("e1").expect("e1 should parse");
        assert_eq!((e1.row(), e1.col()), (7, 4));
    }

    #[test]
    fn invalid_coordinates_are_rejected() {
        for coords in ["", "e", "e44", "i4", "a9", "a0", "4e"] {
            assert_eq!(
                coords_to_square(coords),
                Err(ChessError::InvalidCoordinate(coords.to_owned())),
                "{coords:?} should not parse"
            );
        }
    }
}
