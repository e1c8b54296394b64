//! Level assembly pipeline
//!
//! One attempt runs four stages over a fresh grid: seed the main word on the
//! diagonal, cross a sub-word horizontally through each diagonal letter,
//! bootstrap vertical words off those crosses, then alternate directions to
//! fill out the layout. An attempt that ends below the acceptance threshold
//! is thrown away whole and generation starts over with a new main word, up
//! to a bounded number of retries.

use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

use crate::core::{Grid, GridPosition, Orientation, PlacedWord};
use crate::generator::LevelConfig;
use crate::generator::layout::Layout;
use crate::generator::validator::{can_place_horizontal, can_place_vertical};
use crate::lexicon::pick_main_word;

/// Words the fill-phase estimate assumes the seeding stages placed
/// (the main word plus its up-to-six crosses)
const SEED_COUNT_ESTIMATE: usize = 7;

/// Error type for failed level generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// No six-letter word in the list has enough sub-words
    NoViableMainWord { min_subwords: usize },
    /// Every attempt produced a layout below the acceptance threshold
    RetriesExhausted { retries: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoViableMainWord { min_subwords } => write!(
                f,
                "no six-letter word in the list has at least {min_subwords} sub-words"
            ),
            Self::RetriesExhausted { retries } => write!(
                f,
                "could not build a dense enough layout in {retries} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerationError {}

/// A finished, accepted level
#[derive(Debug, Clone)]
pub struct Level {
    grid: Grid,
    layout: Layout,
}

impl Level {
    /// Assemble a level from parts already known to be consistent
    pub(crate) fn from_parts(grid: Grid, layout: Layout) -> Self {
        Self { grid, layout }
    }

    /// The solution grid with every letter filled in
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The placed words and their cells
    #[inline]
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The main word as picked from the list
    #[inline]
    #[must_use]
    pub fn main_word(&self) -> &str {
        self.layout.main_word()
    }

    /// Number of placed words, main word included
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.layout.word_count()
    }
}

/// Builds levels from a word list under a [`LevelConfig`]
pub struct LevelGenerator<'a> {
    config: &'a LevelConfig,
    wordlist: &'a [String],
}

impl<'a> LevelGenerator<'a> {
    /// Create a generator over a word list
    #[must_use]
    pub const fn new(config: &'a LevelConfig, wordlist: &'a [String]) -> Self {
        Self { config, wordlist }
    }

    /// Generate one level
    ///
    /// Each retry picks a fresh main word and rebuilds from scratch; partial
    /// layouts are never reused.
    ///
    /// # Errors
    /// Returns [`GenerationError::NoViableMainWord`] when the list cannot
    /// supply a main word at all, and [`GenerationError::RetriesExhausted`]
    /// when no attempt reaches the acceptance threshold.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Level, GenerationError> {
        for retry in 0..self.config.max_generation_retries {
            let Some((main_word, subwords)) =
                pick_main_word(self.wordlist, self.config.min_subwords, rng)
            else {
                // A list with no viable main word never produces one;
                // retrying cannot help
                return Err(GenerationError::NoViableMainWord {
                    min_subwords: self.config.min_subwords,
                });
            };

            if let Some(level) = self.attempt(&main_word, &subwords, rng) {
                return Ok(level);
            }
            debug!("level attempt {} fell short, retrying", retry + 1);
        }

        Err(GenerationError::RetriesExhausted {
            retries: self.config.max_generation_retries,
        })
    }

    /// Run the four placement stages once; `None` when the result is too thin
    fn attempt<R: Rng>(&self, main_word: &str, subwords: &[String], rng: &mut R) -> Option<Level> {
        let mut grid = Grid::new(self.config.rows, self.config.columns);
        let mut layout = Layout::new(main_word, subwords.to_vec());

        let main = main_word.to_lowercase();
        let mut pool: Vec<String> = subwords.iter().map(|word| word.to_lowercase()).collect();
        pool.shuffle(rng);

        self.seed_main_diagonal(&main, &mut grid, &mut layout);
        self.seed_crossing_words(&main, &mut pool, &mut grid, &mut layout);

        let horizontals = layout.words_with_orientation(Orientation::Horizontal);
        if horizontals.is_empty() {
            return None;
        }

        // Bootstrap verticals off the seeded crosses; the first try is free,
        // the rest count against the attempt budget
        let mut vertical_count = 0;
        if let Some(through) = horizontals.choose(rng) {
            if self.place_vertical_crossing(through, &mut pool, &mut grid, &mut layout, rng) {
                vertical_count += 1;
            }
        }

        let mut attempts = 0;
        while vertical_count < self.config.min_vertical_words
            && attempts < self.config.bootstrap_attempts()
        {
            let horizontals = layout.words_with_orientation(Orientation::Horizontal);
            let Some(through) = horizontals.choose(rng) else {
                break;
            };
            if self.place_vertical_crossing(through, &mut pool, &mut grid, &mut layout, rng) {
                vertical_count += 1;
            }
            attempts += 1;
        }

        self.fill_remaining(&mut pool, &mut grid, &mut layout, vertical_count, rng);

        if layout.word_count() >= self.config.min_placed_words {
            Some(Level { grid, layout })
        } else {
            None
        }
    }

    /// Write the main word, uppercased, stepping down-right two cells at a
    /// time from the centered start
    fn seed_main_diagonal(&self, main: &str, grid: &mut Grid, layout: &mut Layout) {
        let mut cells = Vec::with_capacity(main.chars().count());
        for (i, letter) in main.chars().enumerate() {
            let pos = GridPosition::new(
                self.config.center_row() + 2 * i as i32,
                self.config.center_col() + 2 * i as i32,
            );
            grid.set_pos(pos, letter.to_ascii_uppercase());
            cells.push(pos);
        }
        layout.add_word(placed(
            &main.to_uppercase(),
            cells,
            Orientation::Diagonal,
            true,
        ));
    }

    /// Cross one sub-word horizontally through each diagonal letter, in main
    /// word order
    ///
    /// The first pool word containing the letter is taken as is -- no
    /// legality check, the grid is still sparse enough. The anchor cell keeps
    /// its uppercase letter; cells off the grid are dropped silently but
    /// still recorded in the placement.
    fn seed_crossing_words(
        &self,
        main: &str,
        pool: &mut Vec<String>,
        grid: &mut Grid,
        layout: &mut Layout,
    ) {
        for (i, main_letter) in main.chars().enumerate() {
            let anchor = GridPosition::new(
                self.config.center_row() + 2 * i as i32,
                self.config.center_col() + 2 * i as i32,
            );

            let mut chosen = None;
            for (idx, subword) in pool.iter().enumerate() {
                if let Some(loc) = subword.chars().position(|c| c == main_letter) {
                    chosen = Some((idx, loc));
                    break;
                }
            }
            let Some((idx, loc)) = chosen else {
                continue;
            };

            let subword = pool.remove(idx);
            let mut cells = Vec::with_capacity(subword.chars().count());
            for (j, letter) in subword.chars().enumerate() {
                let col = anchor.col + (j as i32 - loc as i32);
                if j == loc {
                    grid.set(anchor.row, col, letter.to_ascii_uppercase());
                } else {
                    grid.set(anchor.row, col, letter);
                }
                cells.push(GridPosition::new(anchor.row, col));
            }
            layout.add_word(placed(&subword, cells, Orientation::Horizontal, false));
        }
    }

    /// Try to hang one vertical word off a random letter of `through`
    ///
    /// Scans the pool in order and places the first word that contains the
    /// anchor letter and passes the legality check. Returns whether a word
    /// was placed.
    fn place_vertical_crossing<R: Rng>(
        &self,
        through: &str,
        pool: &mut Vec<String>,
        grid: &mut Grid,
        layout: &mut Layout,
        rng: &mut R,
    ) -> bool {
        let Some(positions) = layout.positions_of(through) else {
            return false;
        };
        if positions.is_empty() {
            return false;
        }

        let letters: Vec<char> = through.chars().collect();
        let pick = rng.random_range(0..letters.len());
        let anchor_letter = letters[pick];
        let anchor = positions[pick];

        let mut chosen = None;
        for (idx, subword) in pool.iter().enumerate() {
            if let Some(loc) = subword.chars().position(|c| c == anchor_letter) {
                if can_place_vertical(grid, subword, anchor, loc) {
                    chosen = Some((idx, loc));
                    break;
                }
            }
        }
        let Some((idx, loc)) = chosen else {
            return false;
        };

        let subword = pool.remove(idx);
        let mut cells = Vec::with_capacity(subword.chars().count());
        for (j, letter) in subword.chars().enumerate() {
            let row = anchor.row + (j as i32 - loc as i32);
            // The anchor cell already holds this letter
            if j != loc {
                grid.set(row, anchor.col, letter);
            }
            cells.push(GridPosition::new(row, anchor.col));
        }
        layout.add_word(placed(&subword, cells, Orientation::Vertical, false));
        true
    }

    /// Try to run one horizontal word through a random letter of `through`
    fn place_horizontal_crossing<R: Rng>(
        &self,
        through: &str,
        pool: &mut Vec<String>,
        grid: &mut Grid,
        layout: &mut Layout,
        rng: &mut R,
    ) -> bool {
        let Some(positions) = layout.positions_of(through) else {
            return false;
        };
        if positions.is_empty() {
            return false;
        }

        let letters: Vec<char> = through.chars().collect();
        let pick = rng.random_range(0..letters.len());
        let anchor_letter = letters[pick];
        let anchor = positions[pick];

        let mut chosen = None;
        for (idx, subword) in pool.iter().enumerate() {
            if let Some(loc) = subword.chars().position(|c| c == anchor_letter) {
                if can_place_horizontal(grid, subword, anchor, loc) {
                    chosen = Some((idx, loc));
                    break;
                }
            }
        }
        let Some((idx, loc)) = chosen else {
            return false;
        };

        let subword = pool.remove(idx);
        let mut cells = Vec::with_capacity(subword.chars().count());
        for (j, letter) in subword.chars().enumerate() {
            let col = anchor.col + (j as i32 - loc as i32);
            if j != loc {
                grid.set(anchor.row, col, letter);
            }
            cells.push(GridPosition::new(anchor.row, col));
        }
        layout.add_word(placed(&subword, cells, Orientation::Horizontal, false));
        true
    }

    /// Alternate directions, hanging words off random placed words, until
    /// the estimated count reaches the target or the attempt budget runs out
    fn fill_remaining<R: Rng>(
        &self,
        pool: &mut Vec<String>,
        grid: &mut Grid,
        layout: &mut Layout,
        mut vertical_count: usize,
        rng: &mut R,
    ) {
        let mut horizontal_count = 0;
        let mut place_vertical = rng.random_bool(0.5);
        let mut attempts = 0;

        while vertical_count + horizontal_count + SEED_COUNT_ESTIMATE < self.config.max_total_words
            && attempts < self.config.max_attempts
        {
            if place_vertical {
                let horizontals = layout.words_with_orientation(Orientation::Horizontal);
                let Some(through) = horizontals.choose(rng) else {
                    break;
                };
                if self.place_vertical_crossing(through, pool, grid, layout, rng) {
                    vertical_count += 1;
                }
            } else {
                let verticals = layout.words_with_orientation(Orientation::Vertical);
                let Some(through) = verticals.choose(rng) else {
                    break;
                };
                if self.place_horizontal_crossing(through, pool, grid, layout, rng) {
                    horizontal_count += 1;
                }
            }

            // Direction flips every iteration, placed or not
            place_vertical = !place_vertical;
            attempts += 1;
        }
    }
}

// Letters and positions are always built in lockstep by the engine
fn placed(
    text: &str,
    cells: Vec<GridPosition>,
    orientation: Orientation,
    is_main: bool,
) -> PlacedWord {
    PlacedWord::new(text, cells, orientation, is_main)
        .expect("letters and positions built together")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;
    use crate::lexicon::{WORDS, is_valid_subword};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate_level(seed: u64) -> Level {
        let config = LevelConfig::default();
        let words = words_from_slice(WORDS);
        let generator = LevelGenerator::new(&config, &words);
        let mut rng = StdRng::seed_from_u64(seed);
        generator.generate(&mut rng).unwrap()
    }

    #[test]
    fn generated_level_meets_word_target() {
        let config = LevelConfig::default();
        for seed in [1, 2, 3] {
            let level = generate_level(seed);
            assert!(
                level.word_count() >= config.min_placed_words,
                "seed {seed}: only {} words placed",
                level.word_count()
            );
        }
    }

    #[test]
    fn main_word_sits_on_the_diagonal() {
        let config = LevelConfig::default();
        let level = generate_level(4);

        let key = level.main_word().to_uppercase();
        let placed = level.layout().get(&key).unwrap();
        assert!(placed.is_main_word());
        assert_eq!(placed.orientation(), Orientation::Diagonal);

        for (i, (letter, pos)) in placed.letter_positions().enumerate() {
            let expected = GridPosition::new(
                config.center_row() + 2 * i as i32,
                config.center_col() + 2 * i as i32,
            );
            assert_eq!(pos, expected);
            assert!(letter.is_ascii_uppercase());
            assert_eq!(level.grid().get_pos(pos), letter);
        }
    }

    #[test]
    fn placed_words_agree_with_grid() {
        let level = generate_level(5);
        let grid = level.grid();

        for word in level.layout().placed_words() {
            assert_eq!(word.text().chars().count(), word.positions().len());
            for (letter, pos) in word.letter_positions() {
                assert!(
                    grid.in_bounds(pos.row, pos.col),
                    "{} holds an off-grid cell {pos}",
                    word.text()
                );
                let cell = grid.get_pos(pos);
                assert!(
                    cell.eq_ignore_ascii_case(&letter),
                    "{} expects {letter} at {pos}, grid holds {cell}",
                    word.text()
                );
            }
        }
    }

    #[test]
    fn placed_subwords_respect_the_letter_budget() {
        let level = generate_level(6);
        let main = level.main_word().to_string();

        for word in level.layout().placed_words() {
            if word.is_main_word() {
                continue;
            }
            let len = word.text().chars().count();
            assert!((3..=6).contains(&len), "{} has {len} letters", word.text());
            assert!(
                is_valid_subword(word.text(), &main),
                "{} is not a sub-word of {main}",
                word.text()
            );
        }
    }

    #[test]
    fn same_seed_same_level() {
        let first = generate_level(7);
        let second = generate_level(7);

        assert_eq!(first.main_word(), second.main_word());

        let mut first_words: Vec<String> = first
            .layout()
            .placed_words()
            .map(|w| w.text().to_string())
            .collect();
        let mut second_words: Vec<String> = second
            .layout()
            .placed_words()
            .map(|w| w.text().to_string())
            .collect();
        first_words.sort();
        second_words.sort();
        assert_eq!(first_words, second_words);
    }

    #[test]
    fn unusable_list_fails_fast() {
        let config = LevelConfig::default();
        let words = vec!["rag".to_string(), "net".to_string()];
        let generator = LevelGenerator::new(&config, &words);
        let mut rng = StdRng::seed_from_u64(8);

        assert!(matches!(
            generator.generate(&mut rng),
            Err(GenerationError::NoViableMainWord { min_subwords: 20 })
        ));
    }

    #[test]
    fn retries_bound_is_reported() {
        // An acceptance threshold no layout can reach forces every retry to
        // fail
        let config = LevelConfig {
            min_subwords: 2,
            min_placed_words: 100,
            max_generation_retries: 3,
            ..LevelConfig::default()
        };
        let words: Vec<String> = ["garnet", "rag", "net", "tan"]
            .iter()
            .map(|&w| w.to_string())
            .collect();
        let generator = LevelGenerator::new(&config, &words);
        let mut rng = StdRng::seed_from_u64(9);

        assert!(matches!(
            generator.generate(&mut rng),
            Err(GenerationError::RetriesExhausted { retries: 3 })
        ));
    }

    #[test]
    fn generation_error_messages() {
        let no_main = GenerationError::NoViableMainWord { min_subwords: 20 };
        assert!(no_main.to_string().contains("20"));

        let exhausted = GenerationError::RetriesExhausted { retries: 50 };
        assert!(exhausted.to_string().contains("50"));
    }

    #[test]
    fn layout_keeps_original_pool_order() {
        let level = generate_level(10);
        let main = level.main_word().to_string();

        // The stored pool is the unshuffled sub-word list
        for word in level.layout().subwords() {
            assert!(is_valid_subword(word, &main));
        }
        assert!(level.layout().subwords().len() >= 20);
    }
}
