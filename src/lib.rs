//! Worderly
//!
//! Generator and gameplay engine for Wizards of Worderly Palace, a terminal
//! word game played on a 15x25 crossword-style grid.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use worderly::generator::{LevelConfig, LevelGenerator};
//! use worderly::lexicon::{WORDS, loader::words_from_slice};
//!
//! // Build a level from the bundled dictionary
//! let words = words_from_slice(WORDS);
//! let config = LevelConfig::default();
//! let generator = LevelGenerator::new(&config, &words);
//!
//! let level = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
//! println!("{}", level.grid());
//! ```

// Core domain types
pub mod core;

// Word lists and sub-word filtering
pub mod lexicon;

// Level generation
pub mod generator;

// Gameplay state
pub mod game;

// Persistent high scores
pub mod leaderboard;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
