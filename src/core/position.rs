//! Grid coordinate representation
//!
//! A `GridPosition` is a signed (row, column) pair. Coordinates are signed so
//! that boundary arithmetic during placement checks (one cell above row 0, one
//! cell left of column 0) stays representable without casts.

use std::fmt;

/// A (row, column) coordinate on the puzzle grid
///
/// Row 0 is the top row, column 0 the leftmost column. Positions outside the
/// grid are legal values; the grid itself decides what out-of-bounds access
/// means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}

impl GridPosition {
    /// Create a position from a row and column
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position offset by the given deltas
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
