//! Generate command
//!
//! Builds a single level and hands it back for inspection printing.

use crate::generator::{GenerationError, Level, LevelConfig, LevelGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// A generated level together with how long generation took
pub struct GenerateOutcome {
    pub level: Level,
    pub elapsed: Duration,
}

/// Generate one level from the word list
///
/// A seed makes the run reproducible; without one the thread RNG is used.
///
/// # Errors
///
/// Returns an error if the word list has no viable main word or if the
/// retry budget runs out before a dense enough level appears.
pub fn generate_level(
    wordlist: &[String],
    seed: Option<u64>,
) -> Result<GenerateOutcome, GenerationError> {
    let config = LevelConfig::default();
    let generator = LevelGenerator::new(&config, wordlist);

    let start = Instant::now();
    let level = match seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed))?,
        None => generator.generate(&mut rand::rng())?,
    };

    Ok(GenerateOutcome {
        level,
        elapsed: start.elapsed(),
    })
}
