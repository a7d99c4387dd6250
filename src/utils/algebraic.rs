//! Algebraic coordinate conversions.
//!
//! Converts between human-readable square names (e.g., `e4`) and the
//! engine's `(row, col)` grid locations, where `col = file - 'a'` and
//! `row = 8 - rank`.

use crate::board_location::{location_in_bounds, BoardLocation};
use crate::errors::Errors;

/// Convert an algebraic square name (for example: "e4") to a grid location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, Errors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidAlgebraic);
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(Errors::InvalidAlgebraic);
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(Errors::InvalidAlgebraic);
    }

    let col = (file - b'a') as i8;
    let row = 8 - (rank - b'0') as i8;
    Ok((row, col))
}

/// Convert a grid location to its algebraic square name (for example: "e4").
#[inline]
pub fn location_to_algebraic(location: &BoardLocation) -> Result<String, Errors> {
    if !location_in_bounds(location) {
        return Err(Errors::OutOfBounds);
    }

    let file_char = char::from(b'a' + location.1 as u8);
    let rank_char = char::from(b'0' + (8 - location.0) as u8);
    Ok(format!("{file_char}{rank_char}"))
}
