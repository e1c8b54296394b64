//! Sub-word filtering and main-word selection
//!
//! A word qualifies as a sub-word of the main word when it can be spelled
//! from the main word's letters without exceeding any letter's count. The
//! comparison folds case on both sides; the main word itself never qualifies.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

/// Letters a puzzle word must have at minimum
pub const MIN_SUBWORD_LEN: usize = 3;
/// Letters a puzzle word may have at most (the main word's length)
pub const MAX_SUBWORD_LEN: usize = 6;

fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check whether `word` can be built from `main`'s letters
///
/// Both sides are case-folded. A word equal to the main word is rejected;
/// otherwise each letter of `word` may appear at most as often as it does in
/// `main`. Anagrams of the main word pass.
///
/// The empty string vacuously passes; callers filter by length before this
/// predicate, so that case never reaches a puzzle.
///
/// # Examples
/// ```
/// use worderly::lexicon::is_valid_subword;
///
/// assert!(is_valid_subword("rag", "garnet"));
/// assert!(is_valid_subword("argent", "garnet")); // anagram
/// assert!(!is_valid_subword("tee", "garnet")); // too many e's
/// assert!(!is_valid_subword("GARNET", "garnet")); // the main word itself
/// ```
#[must_use]
pub fn is_valid_subword(word: &str, main: &str) -> bool {
    let word = word.to_lowercase();
    let main = main.to_lowercase();

    if word == main {
        return false;
    }

    let budget = letter_counts(&main);
    letter_counts(&word)
        .iter()
        .all(|(ch, &count)| budget.get(ch).copied().unwrap_or(0) >= count)
}

/// All sub-words of `main` found in `list`, in list order
///
/// Entries are trimmed; only words of 3-6 letters are considered.
#[must_use]
pub fn subwords_of(main: &str, list: &[String]) -> Vec<String> {
    list.iter()
        .map(|word| word.trim())
        .filter(|word| {
            let len = word.chars().count();
            (MIN_SUBWORD_LEN..=MAX_SUBWORD_LEN).contains(&len) && is_valid_subword(word, main)
        })
        .map(str::to_string)
        .collect()
}

/// All six-letter entries of `list`, trimmed, in list order
#[must_use]
pub fn six_letter_candidates(list: &[String]) -> Vec<String> {
    list.iter()
        .map(|word| word.trim())
        .filter(|word| word.chars().count() == MAX_SUBWORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Pick a main word with enough sub-words, uniformly at random
///
/// Shuffles the six-letter candidates and returns the first whose sub-word
/// pool reaches `min_subwords`, along with that pool. Returns `None` when no
/// candidate qualifies; retrying is the caller's decision.
pub fn pick_main_word<R: Rng>(
    list: &[String],
    min_subwords: usize,
    rng: &mut R,
) -> Option<(String, Vec<String>)> {
    let mut candidates = six_letter_candidates(list);
    candidates.shuffle(rng);

    for candidate in candidates {
        let subwords = subwords_of(&candidate, list);
        if subwords.len() >= min_subwords {
            return Some((candidate, subwords));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn subword_within_letter_budget() {
        assert!(is_valid_subword("rag", "garnet"));
        assert!(is_valid_subword("tan", "garnet"));
        assert!(is_valid_subword("garnet", "garnets"));
    }

    #[test]
    fn subword_rejects_excess_letter_count() {
        // garnet has one e and one t
        assert!(!is_valid_subword("tee", "garnet"));
        assert!(!is_valid_subword("tat", "garnet"));
        assert!(!is_valid_subword("gag", "garnet"));
    }

    #[test]
    fn subword_rejects_foreign_letters() {
        assert!(!is_valid_subword("rags", "garnet"));
        assert!(!is_valid_subword("zoo", "garnet"));
    }

    #[test]
    fn subword_rejects_main_word_itself_case_folded() {
        assert!(!is_valid_subword("garnet", "garnet"));
        assert!(!is_valid_subword("GARNET", "garnet"));
        assert!(!is_valid_subword("Garnet", "gArNeT"));
    }

    #[test]
    fn subword_accepts_anagram_of_main() {
        assert!(is_valid_subword("argent", "garnet"));
    }

    #[test]
    fn subword_folds_case_on_both_sides() {
        assert!(is_valid_subword("RAG", "garnet"));
        assert!(is_valid_subword("rag", "GARNET"));
    }

    #[test]
    fn subword_empty_string_vacuously_passes() {
        // Unreachable through the length filters, but defined
        assert!(is_valid_subword("", "garnet"));
    }

    #[test]
    fn subwords_of_filters_length_and_preserves_order() {
        let words = list(&["an", "rag", "tanner", "net", "garnet", "grate", "seventy"]);
        let subwords = subwords_of("garnet", &words);
        // "an" too short, "tanner" needs two n's, "garnet" is the main word,
        // "seventy" too long
        assert_eq!(subwords, vec!["rag", "net", "grate"]);
    }

    #[test]
    fn subwords_of_trims_entries() {
        let words = list(&["  rag ", "net\t"]);
        assert_eq!(subwords_of("garnet", &words), vec!["rag", "net"]);
    }

    #[test]
    fn six_letter_candidates_filters_and_trims() {
        let words = list(&["rag", " garnet ", "grates", "grate", "poodle"]);
        assert_eq!(
            six_letter_candidates(&words),
            vec!["garnet", "grates", "poodle"]
        );
    }

    #[test]
    fn pick_main_word_returns_only_qualifying_candidate() {
        // "garnet" has three sub-words here, "poodle" has none
        let words = list(&["garnet", "poodle", "rag", "net", "tan"]);
        let mut rng = StdRng::seed_from_u64(7);

        let (main, subwords) = pick_main_word(&words, 3, &mut rng).unwrap();
        assert_eq!(main, "garnet");
        assert_eq!(subwords.len(), 3);
    }

    #[test]
    fn pick_main_word_none_when_no_candidate_qualifies() {
        let words = list(&["garnet", "rag"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_main_word(&words, 20, &mut rng).is_none());
    }

    #[test]
    fn pick_main_word_none_without_six_letter_entries() {
        let words = list(&["rag", "net", "tan"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_main_word(&words, 1, &mut rng).is_none());
    }

    #[test]
    fn pick_main_word_deterministic_for_seed() {
        let words = list(&["garnet", "argent", "rag", "net", "tan", "rat", "ear", "gnat"]);
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let pick_a = pick_main_word(&words, 4, &mut rng_a);
        let pick_b = pick_main_word(&words, 4, &mut rng_b);
        assert_eq!(pick_a, pick_b);
    }
}
