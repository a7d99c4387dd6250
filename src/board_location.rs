use crate::errors::Errors;

/// A board location as a `(row, col)` pair into the row-major grid.
///
/// Row 0 is rank 8 (black's back rank), row 7 is rank 1; column 0 is
/// file 'a'. Signed so offset arithmetic can step off the board and be
/// rejected by the bounds check instead of wrapping.
pub type BoardLocation = (i8, i8);

/// Returns true when the location lies on the 8x8 board.
#[inline]
pub const fn location_in_bounds(x: &BoardLocation) -> bool {
    x.0 >= 0 && x.0 <= 7 && x.1 >= 0 && x.1 <= 7
}

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset (positive moves toward rank 1).
/// * `d_col` - The column offset (positive moves toward file 'h').
///
/// # Returns
///
/// * `Result<BoardLocation, Errors>` - Returns the new board location if
///   within bounds, otherwise returns an error.
pub fn offset_board_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, Errors> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if location_in_bounds(&y) {
        Ok(y)
    } else {
        Err(Errors::OutOfBounds)
    }
}

#[cfg(test)]
mod tests {
    use super::{location_in_bounds, offset_board_location};
    use crate::errors::Errors;

    #[test]
    fn offsets_within_bounds_succeed() {
        assert_eq!(
            offset_board_location(&(4, 3), -2, 1).expect("in bounds"),
            (2, 4)
        );
        assert_eq!(
            offset_board_location(&(0, 0), 7, 7).expect("in bounds"),
            (7, 7)
        );
    }

    #[test]
    fn offsets_off_the_board_are_rejected() {
        assert_eq!(offset_board_location(&(0, 0), -1, 0), Err(Errors::OutOfBounds));
        assert_eq!(offset_board_location(&(7, 7), 0, 1), Err(Errors::OutOfBounds));
        assert!(!location_in_bounds(&(8, 0)));
        assert!(!location_in_bounds(&(3, -1)));
    }
}
