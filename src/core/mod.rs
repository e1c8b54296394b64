//! Core domain types for the puzzle grid
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod grid;
mod placed;
mod position;

pub use grid::Grid;
pub use placed::{Orientation, PlacedWord, PlacedWordError};
pub use position::GridPosition;
