//! Bench command
//!
//! Generates a batch of levels and reports timing and word-count
//! statistics.

use crate::generator::{LevelConfig, LevelGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a bench run
pub struct BenchResult {
    pub total_levels: usize,
    pub failures: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub average_words: f64,
    pub word_distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub levels_per_second: f64,
}

/// Generate `count` levels and collect statistics
///
/// Failed generations (retry budget exhausted, unusable word list) are
/// counted instead of aborting the run.
///
/// # Panics
///
/// Panics if the progress bar template string is invalid.
pub fn run_bench<R: Rng>(wordlist: &[String], count: usize, rng: &mut R) -> BenchResult {
    let config = LevelConfig::default();
    let generator = LevelGenerator::new(&config, wordlist);

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut word_counts: Vec<usize> = Vec::with_capacity(count);
    let mut word_distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = 0;

    let start = Instant::now();

    for idx in 0..count {
        match generator.generate(rng) {
            Ok(level) => {
                let words = level.word_count();
                word_counts.push(words);
                *word_distribution.entry(words).or_insert(0) += 1;
            }
            Err(_) => failures += 1,
        }

        if idx % 10 == 0 && !word_counts.is_empty() {
            let avg = word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64;
            pb.set_message(format!("Avg words: {avg:.1}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let average_words = if word_counts.is_empty() {
        0.0
    } else {
        word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
    };

    BenchResult {
        total_levels: count,
        failures,
        min_words: word_counts.iter().copied().min().unwrap_or(0),
        max_words: word_counts.iter().copied().max().unwrap_or(0),
        average_words,
        word_distribution,
        duration,
        levels_per_second: count as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::WORDS;
    use crate::lexicon::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bench_runs() {
        let words = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_bench(&words, 3, &mut rng);

        assert_eq!(result.total_levels, 3);
        assert_eq!(result.failures, 0);
        assert!(result.min_words >= LevelConfig::default().min_placed_words);
        assert!(result.max_words >= result.min_words);
    }

    #[test]
    fn bench_distribution_sums_correctly() {
        let words = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(6);

        let result = run_bench(&words, 4, &mut rng);

        let distribution_sum: usize = result.word_distribution.values().sum();
        assert_eq!(distribution_sum, result.total_levels - result.failures);
    }

    #[test]
    fn bench_metrics_consistency() {
        let words = words_from_slice(WORDS);
        let mut rng = StdRng::seed_from_u64(7);

        let result = run_bench(&words, 3, &mut rng);

        assert!(result.average_words >= result.min_words as f64);
        assert!(result.average_words <= result.max_words as f64);
    }

    #[test]
    fn bench_counts_failures_on_unusable_list() {
        let words: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(8);

        let result = run_bench(&words, 2, &mut rng);

        assert_eq!(result.total_levels, 2);
        assert_eq!(result.failures, 2);
        assert_eq!(result.min_words, 0);
        assert!(result.average_words.abs() < f64::EPSILON);
    }
}
