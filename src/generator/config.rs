//! Level generation parameters
//!
//! One place for the grid dimensions, word-count targets, and attempt limits
//! that shape a puzzle. The defaults produce the standard 15x25 level built
//! around a six-letter main word.

/// Tunable parameters for level generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub columns: usize,
    /// Length of the main word
    pub word_length: usize,
    /// Sub-words a main-word candidate must have to qualify
    pub min_subwords: usize,
    /// Vertical words the bootstrap phase aims for
    pub min_vertical_words: usize,
    /// Placed words (main word included) a layout needs to be accepted
    pub min_placed_words: usize,
    /// Word-count estimate at which the fill phase stops
    pub max_total_words: usize,
    /// Iteration cap for the fill phase; the bootstrap phase gets a fifth
    pub max_attempts: usize,
    /// Whole-level retries before generation gives up
    pub max_generation_retries: usize,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 25,
            word_length: 6,
            min_subwords: 20,
            min_vertical_words: 4,
            min_placed_words: 21,
            max_total_words: 25,
            max_attempts: 100,
            max_generation_retries: 50,
        }
    }
}

impl LevelConfig {
    /// Row of the main word's first letter
    ///
    /// Ceiling of half the height, pulled back by the word length so the
    /// diagonal sits centered.
    #[inline]
    #[must_use]
    pub const fn center_row(&self) -> i32 {
        ((self.rows + 1) / 2) as i32 - self.word_length as i32
    }

    /// Column of the main word's first letter
    #[inline]
    #[must_use]
    pub const fn center_col(&self) -> i32 {
        ((self.columns + 1) / 2) as i32 - self.word_length as i32
    }

    /// Attempt cap for the vertical bootstrap phase
    #[inline]
    #[must_use]
    pub const fn bootstrap_attempts(&self) -> usize {
        self.max_attempts / 5
    }
}
