//! Command implementations

pub mod bench;
pub mod generate;
pub mod play;

pub use bench::{BenchResult, run_bench};
pub use generate::{GenerateOutcome, generate_level};
pub use play::run_play;
