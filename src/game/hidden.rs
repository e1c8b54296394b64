//! The masked grid shown to the player
//!
//! Every letter cell is covered with a heart until its word is guessed;
//! empty cells stay as they are.

use crate::core::{Grid, GridPosition};
use std::fmt;

/// Cover placed over unrevealed letters
pub const MASK: char = '♥';

/// A display grid whose letters start covered
#[derive(Debug, Clone)]
pub struct HiddenGrid {
    grid: Grid,
}

impl HiddenGrid {
    /// Mask a solution grid
    #[must_use]
    pub fn new(solution: &Grid) -> Self {
        let mut grid = Grid::new(solution.rows(), solution.cols());
        for row in 0..solution.rows() as i32 {
            for col in 0..solution.cols() as i32 {
                if solution.get(row, col) != Grid::EMPTY {
                    grid.set(row, col, MASK);
                }
            }
        }
        Self { grid }
    }

    /// The grid as currently revealed
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Uncover one cell with the letter to display
    pub fn reveal(&mut self, pos: GridPosition, letter: char) {
        self.grid.set_pos(pos, letter);
    }
}

impl fmt::Display for HiddenGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.grid.fmt(f)
    }
}
