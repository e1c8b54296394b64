//! One round of play over a generated level
//!
//! The session owns the level, the masked grid, and the running score. Each
//! guess either reveals a word's cells, burns a life, or both ends of the
//! round fall out of `is_won` / `is_lost`. Presentation is the caller's job;
//! the session only reports what happened.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;

use crate::core::GridPosition;
use crate::game::hidden::HiddenGrid;
use crate::generator::Level;

/// Lives a round starts with
pub const STARTING_LIVES: u32 = 5;

/// What a single guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// A word was newly found; `gained` counts the cells it revealed
    Revealed { word: String, gained: u32 },
    /// The word was already found; costs a life
    AlreadyFound,
    /// The word is not in the puzzle; costs a life
    NotInPuzzle,
}

/// Live state of one round
#[derive(Debug, Clone)]
pub struct GameSession {
    level: Level,
    hidden: HiddenGrid,
    scrambled_letters: String,
    lives: u32,
    points: u32,
    found: FxHashSet<String>,
    revealed: FxHashSet<GridPosition>,
    last_guess: String,
    main_diagonal: Vec<GridPosition>,
}

impl GameSession {
    /// Start a round; the letter bank is shuffled with the given source
    #[must_use]
    pub fn new<R: Rng>(level: Level, rng: &mut R) -> Self {
        let mut letters: Vec<char> = level.main_word().chars().collect();
        letters.shuffle(rng);
        let scrambled_letters = letters
            .iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let hidden = HiddenGrid::new(level.grid());
        let main_key = level.main_word().to_uppercase();
        let main_diagonal = level
            .layout()
            .positions_of(&main_key)
            .map(<[GridPosition]>::to_vec)
            .unwrap_or_default();

        Self {
            level,
            hidden,
            scrambled_letters,
            lives: STARTING_LIVES,
            points: 0,
            found: FxHashSet::default(),
            revealed: FxHashSet::default(),
            last_guess: "None".to_string(),
            main_diagonal,
        }
    }

    /// Resolve one guess
    ///
    /// Guesses are trimmed and matched case-insensitively against the placed
    /// words. A word found for the first time reveals its cells, scoring one
    /// point per cell not already uncovered by a crossing word. Wrong and
    /// repeated guesses both cost a life.
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        let guess = raw.trim().to_lowercase();

        let key = self
            .level
            .layout()
            .placed_words()
            .map(|word| word.text().to_string())
            .find(|text| text.to_lowercase() == guess);

        let Some(key) = key else {
            self.lives = self.lives.saturating_sub(1);
            self.last_guess = format!("{guess} (not found)");
            return GuessOutcome::NotInPuzzle;
        };

        if self.found.contains(&key) {
            self.lives = self.lives.saturating_sub(1);
            self.last_guess = format!("{guess} (already found)");
            return GuessOutcome::AlreadyFound;
        }

        let (cells, is_main) = match self.level.layout().get(&key) {
            Some(word) => (
                word.letter_positions().collect::<Vec<_>>(),
                word.is_main_word(),
            ),
            None => (Vec::new(), false),
        };

        let mut gained = 0;
        for (letter, pos) in cells {
            // Cells shared with an already-found word stay as they are and
            // score nothing
            if !self.revealed.insert(pos) {
                continue;
            }
            let display = if is_main || self.main_diagonal.contains(&pos) {
                letter.to_ascii_uppercase()
            } else {
                letter.to_ascii_lowercase()
            };
            self.hidden.reveal(pos, display);
            self.points += 1;
            gained += 1;
        }

        self.found.insert(key.clone());
        self.last_guess = guess;
        GuessOutcome::Revealed { word: key, gained }
    }

    /// Whether every placed word has been found
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.found.len() == self.level.word_count()
    }

    /// Whether the round is over with words left
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.lives == 0
    }

    /// The level being played
    #[inline]
    #[must_use]
    pub const fn level(&self) -> &Level {
        &self.level
    }

    /// The grid as revealed so far
    #[inline]
    #[must_use]
    pub const fn hidden_grid(&self) -> &HiddenGrid {
        &self.hidden
    }

    /// The main word's letters, shuffled, uppercased, space-separated
    #[inline]
    #[must_use]
    pub fn scrambled_letters(&self) -> &str {
        &self.scrambled_letters
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Words found so far
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Words in the puzzle, main word included
    #[inline]
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.level.word_count()
    }

    /// Note shown beside the grid about the previous guess
    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> &str {
        &self.last_guess
    }

    /// All placed words, sorted, for the word bank display
    #[must_use]
    pub fn word_bank(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .level
            .layout()
            .placed_words()
            .map(|word| word.text().to_string())
            .collect();
        words.sort();
        words
    }
}
