//! Placed-word bookkeeping for a level under construction
//!
//! The layout records which words are on the grid and where. It trusts its
//! callers: the placement engine guarantees keys are unique and placements
//! legal, so mutation here never validates.

use rustc_hash::FxHashMap;

use crate::core::{GridPosition, Orientation, PlacedWord};

/// Words placed on a level, keyed by their text
///
/// The main word is stored uppercase, sub-words lowercase, so the two never
/// collide even when the main word's lowercase form appears in a pool.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    main_word: String,
    subwords: Vec<String>,
    words: FxHashMap<String, PlacedWord>,
}

impl Layout {
    /// Create an empty layout for a main word and its sub-word pool
    #[must_use]
    pub fn new(main_word: impl Into<String>, subwords: Vec<String>) -> Self {
        Self {
            main_word: main_word.into(),
            subwords,
            words: FxHashMap::default(),
        }
    }

    /// The level's main word as picked (lowercase)
    #[inline]
    #[must_use]
    pub fn main_word(&self) -> &str {
        &self.main_word
    }

    /// The full sub-word pool in original list order
    #[inline]
    #[must_use]
    pub fn subwords(&self) -> &[String] {
        &self.subwords
    }

    /// Record a placement, keyed by its text
    pub fn add_word(&mut self, placed: PlacedWord) {
        self.words.insert(placed.text().to_string(), placed);
    }

    /// Drop a placement, returning it if it was present
    pub fn remove_word(&mut self, word: &str) -> Option<PlacedWord> {
        self.words.remove(word)
    }

    /// Look up a placement by its text
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&PlacedWord> {
        self.words.get(word)
    }

    /// Cells a placed word occupies, in letter order
    #[must_use]
    pub fn positions_of(&self, word: &str) -> Option<&[GridPosition]> {
        self.words.get(word).map(PlacedWord::positions)
    }

    /// Number of placed words, main word included
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Whether a word is already placed
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Iterate all placements in map order
    pub fn placed_words(&self) -> impl Iterator<Item = &PlacedWord> {
        self.words.values()
    }

    /// Texts of all placed words running in the given direction
    #[must_use]
    pub fn words_with_orientation(&self, orientation: Orientation) -> Vec<String> {
        self.words
            .values()
            .filter(|placed| placed.orientation() == orientation)
            .map(|placed| placed.text().to_string())
            .collect()
    }
}
