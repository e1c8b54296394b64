//! Puzzle grid of characters
//!
//! A rectangular matrix of cells, each holding `'.'` (empty) or a letter.
//! Out-of-bounds reads return the empty marker and out-of-bounds writes are
//! ignored, so placement code can probe cells beyond the edges without
//! wrapping every access in a bounds check.

use std::fmt;

use crate::core::GridPosition;

/// A rectangular character grid with forgiving bounds behavior
///
/// Reads outside the grid yield [`Grid::EMPTY`]; writes outside the grid do
/// nothing. Neither is ever an error. The grid does not validate content --
/// overwrite legality is the placement validator's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Marker for an empty cell
    pub const EMPTY: char = '.';

    /// Create a grid of the given dimensions with every cell empty
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Self::EMPTY; rows * cols],
        }
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a coordinate lies inside the grid
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Read a cell, returning [`Grid::EMPTY`] for out-of-bounds coordinates
    #[inline]
    #[must_use]
    pub fn get(&self, row: i32, col: i32) -> char {
        if self.in_bounds(row, col) {
            self.cells[row as usize * self.cols + col as usize]
        } else {
            Self::EMPTY
        }
    }

    /// Read the cell at a position
    #[inline]
    #[must_use]
    pub fn get_pos(&self, pos: GridPosition) -> char {
        self.get(pos.row, pos.col)
    }

    /// Write a cell; out-of-bounds coordinates are silently ignored
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, ch: char) {
        if self.in_bounds(row, col) {
            self.cells[row as usize * self.cols + col as usize] = ch;
        }
    }

    /// Write the cell at a position
    #[inline]
    pub fn set_pos(&mut self, pos: GridPosition, ch: char) {
        self.set(pos.row, pos.col, ch);
    }

    /// Whether a cell holds the empty marker (out-of-bounds counts as empty)
    #[inline]
    #[must_use]
    pub fn is_empty_cell(&self, row: i32, col: i32) -> bool {
        self.get(row, col) == Self::EMPTY
    }

    /// Iterate over rows as character slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (i, ch) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_empty() {
        let grid = Grid::new(15, 25);
        assert_eq!(grid.rows(), 15);
        assert_eq!(grid.cols(), 25);
        for row in 0..15 {
            for col in 0..25 {
                assert_eq!(grid.get(row, col), Grid::EMPTY);
            }
        }
    }

    #[test]
    fn grid_set_then_get() {
        let mut grid = Grid::new(15, 25);
        grid.set(3, 11, 'k');
        assert_eq!(grid.get(3, 11), 'k');
        assert_eq!(grid.get(3, 12), '.');
    }

    #[test]
    fn grid_get_out_of_bounds_returns_empty() {
        let grid = Grid::new(15, 25);
        assert_eq!(grid.get(-1, 0), '.');
        assert_eq!(grid.get(0, -1), '.');
        assert_eq!(grid.get(15, 0), '.');
        assert_eq!(grid.get(0, 25), '.');
        assert_eq!(grid.get(-100, 300), '.');
    }

    #[test]
    fn grid_set_out_of_bounds_is_noop() {
        let mut grid = Grid::new(15, 25);
        let before = grid.clone();
        grid.set(-1, 0, 'x');
        grid.set(0, -1, 'x');
        grid.set(15, 0, 'x');
        grid.set(0, 25, 'x');
        assert_eq!(grid, before);
    }

    #[test]
    fn grid_set_overwrites_without_complaint() {
        let mut grid = Grid::new(15, 25);
        grid.set(5, 5, 'a');
        grid.set(5, 5, 'B');
        assert_eq!(grid.get(5, 5), 'B');
    }

    #[test]
    fn grid_corner_cells_in_bounds() {
        let mut grid = Grid::new(15, 25);
        grid.set(0, 0, 'a');
        grid.set(14, 24, 'z');
        assert_eq!(grid.get(0, 0), 'a');
        assert_eq!(grid.get(14, 24), 'z');
    }

    #[test]
    fn grid_position_accessors() {
        let mut grid = Grid::new(15, 25);
        let pos = GridPosition::new(7, 12);
        grid.set_pos(pos, 'q');
        assert_eq!(grid.get_pos(pos), 'q');
        assert_eq!(grid.get_pos(GridPosition::new(-2, 40)), '.');
    }

    #[test]
    fn grid_is_empty_cell() {
        let mut grid = Grid::new(15, 25);
        assert!(grid.is_empty_cell(4, 4));
        grid.set(4, 4, 'm');
        assert!(!grid.is_empty_cell(4, 4));
        // Out of bounds reads as empty
        assert!(grid.is_empty_cell(-1, -1));
    }

    #[test]
    fn grid_iter_rows_shape() {
        let grid = Grid::new(15, 25);
        let rows: Vec<&[char]> = grid.iter_rows().collect();
        assert_eq!(rows.len(), 15);
        assert!(rows.iter().all(|r| r.len() == 25));
    }
}
