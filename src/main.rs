//! Worderly - CLI
//!
//! Crossword-style word puzzle game for the terminal, with TUI and plain CLI
//! modes plus generator tooling.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use worderly::{
    commands::{generate_level, run_bench, run_play},
    leaderboard::{DEFAULT_PATH, Leaderboard},
    lexicon::WORDS,
    output::{print_bench_result, print_leaderboard, print_level_solution},
};

#[derive(Parser)]
#[command(
    name = "worderly",
    about = "Wizards of Worderly Palace: crossword-style word puzzles in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (one word per line); defaults to the bundled dictionary
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Leaderboard file
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_PATH)]
    leaderboard: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Word list file, taking precedence over --wordlist
        wordlist: Option<String>,
    },

    /// Simple CLI mode (plain stdin/stdout gameplay)
    Simple {
        /// Word list file, taking precedence over --wordlist
        wordlist: Option<String>,
    },

    /// Generate a single level and print its solution
    Generate {
        /// Seed for reproducible generation
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Benchmark level generation
    Bench {
        /// Number of levels to generate
        #[arg(short = 'n', long, default_value = "25")]
        count: usize,
    },

    /// Print the top leaderboard entries
    Leaderboard,
}

/// Load the word corpus from a file, or fall back to the embedded list
fn load_wordlist(path: Option<&str>) -> Result<Vec<String>> {
    use worderly::lexicon::loader::{load_from_file, words_from_slice};

    match path {
        Some(path) => {
            load_from_file(path).with_context(|| format!("could not read word list '{path}'"))
        }
        None => Ok(words_from_slice(WORDS)),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { wordlist: None });

    // The positional path on play/simple wins over the global flag
    let path = match &command {
        Commands::Play { wordlist } | Commands::Simple { wordlist } => {
            wordlist.as_deref().or(cli.wordlist.as_deref())
        }
        _ => cli.wordlist.as_deref(),
    };
    let words = load_wordlist(path)?;

    match command {
        Commands::Play { .. } => run_play_command(&words, &cli.leaderboard),
        Commands::Simple { .. } => run_play(&words, &cli.leaderboard),
        Commands::Generate { seed } => run_generate_command(&words, seed),
        Commands::Bench { count } => {
            run_bench_command(&words, count);
            Ok(())
        }
        Commands::Leaderboard => {
            print_leaderboard(Leaderboard::load(&cli.leaderboard).top_entries(10));
            Ok(())
        }
    }
}

fn run_play_command(words: &[String], board_path: &str) -> Result<()> {
    use worderly::interactive::{App, run_tui};

    let app = App::new(words, board_path);
    run_tui(app)
}

fn run_generate_command(words: &[String], seed: Option<u64>) -> Result<()> {
    let outcome = generate_level(words, seed)?;
    print_level_solution(&outcome.level, outcome.elapsed);
    Ok(())
}

fn run_bench_command(words: &[String], count: usize) {
    println!("Generating {count} levels...");
    let result = run_bench(words, count, &mut rand::rng());
    print_bench_result(&result);
}
