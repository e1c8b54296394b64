//! Word lists and sub-word filtering
//!
//! Provides the embedded dictionary compiled into the binary, file loading for
//! user-supplied lists, and the letter-budget filter that decides which words
//! can appear in a puzzle.

mod embedded;
mod filter;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use filter::{is_valid_subword, pick_main_word, six_letter_candidates, subwords_of};
