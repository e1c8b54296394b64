//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Entries are trimmed and empty lines skipped; case is preserved (the
/// filters fold case where it matters).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use worderly::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    Ok(words)
}

/// Convert the embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use worderly::lexicon::loader::words_from_slice;
/// use worderly::lexicon::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
