//! Placed word record
//!
//! A `PlacedWord` ties a word's text to the grid cells it occupies, in letter
//! order, along with how it was laid down.

use std::fmt;

use crate::core::GridPosition;

/// Direction a word runs on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Reserved for the main word, which steps down-right
    Diagonal,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
            Self::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Error type for malformed placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacedWordError {
    /// Letter count and position count differ
    LengthMismatch { letters: usize, positions: usize },
}

impl fmt::Display for PlacedWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { letters, positions } => write!(
                f,
                "placement has {letters} letters but {positions} positions"
            ),
        }
    }
}

impl std::error::Error for PlacedWordError {}

/// A word fixed onto the grid
///
/// `positions[i]` is the cell holding the `i`-th letter of `text`; the two
/// are always the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    text: String,
    positions: Vec<GridPosition>,
    orientation: Orientation,
    is_main_word: bool,
}

impl PlacedWord {
    /// Create a placement record
    ///
    /// # Errors
    /// Returns `PlacedWordError::LengthMismatch` if the number of positions
    /// differs from the number of letters.
    pub fn new(
        text: impl Into<String>,
        positions: Vec<GridPosition>,
        orientation: Orientation,
        is_main_word: bool,
    ) -> Result<Self, PlacedWordError> {
        let text: String = text.into();
        let letters = text.chars().count();
        if letters != positions.len() {
            return Err(PlacedWordError::LengthMismatch {
                letters,
                positions: positions.len(),
            });
        }
        Ok(Self {
            text,
            positions,
            orientation,
            is_main_word,
        })
    }

    /// The word text as placed (case preserved)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cells occupied, in letter order
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[GridPosition] {
        &self.positions
    }

    /// How the word runs
    #[inline]
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether this is the level's main word
    #[inline]
    #[must_use]
    pub const fn is_main_word(&self) -> bool {
        self.is_main_word
    }

    /// Iterate letters paired with the cells they occupy
    pub fn letter_positions(&self) -> impl Iterator<Item = (char, GridPosition)> + '_ {
        self.text.chars().zip(self.positions.iter().copied())
    }
}
