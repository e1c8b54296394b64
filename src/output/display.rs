//! Display functions for command results
//!
//! Pretty-prints generated levels, bench statistics, and the leaderboard
//! table.

use crate::commands::BenchResult;
use crate::core::PlacedWord;
use crate::generator::Level;
use crate::leaderboard::LeaderboardEntry;
use crate::output::formatters::{leaderboard_header, leaderboard_row};
use colored::Colorize;
use std::time::Duration;

/// Print a solved level: the full grid plus the words behind it
pub fn print_level_solution(level: &Level, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATED LEVEL".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", level.grid());

    println!("\n📊 {}", "Layout:".bright_cyan().bold());
    println!(
        "   Main word:    {}",
        level.main_word().to_uppercase().bright_yellow().bold()
    );
    println!("   Words placed: {}", level.word_count());
    println!("   Generated in: {:.1}ms", elapsed.as_secs_f64() * 1000.0);

    let mut words: Vec<&str> = level.layout().placed_words().map(PlacedWord::text).collect();
    words.sort_unstable();
    println!("\n{}", words.join(", "));
}

/// Print bench statistics with a word-count distribution
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Generation:".bright_cyan().bold());
    println!("   Levels built:     {}", result.total_levels);
    if result.failures > 0 {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures).red()
        );
    }
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_words).green()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_words).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Levels/second:    {:.1}", result.levels_per_second);

    println!("\n📈 {}", "Word counts:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .word_distribution
        .iter()
        .map(|(&words, &count)| (words, count))
        .collect();
    counts.sort_unstable();
    for (words, count) in counts {
        let pct = (count as f64 / result.total_levels as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {words}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the leaderboard table, best entries first
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("\n{}", "─".repeat(60));
    println!(
        "{}{}",
        " ".repeat(18),
        "₊✩‧₊˚LEADERBOARD˚₊✩‧₊".bright_cyan().bold()
    );
    println!("{}", "─".repeat(60));

    if entries.is_empty() {
        println!("No entries yet. Be the first to set a record!");
        println!("{}", "─".repeat(60));
        return;
    }

    println!("{}", leaderboard_header());
    println!("{}", "─".repeat(60));
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", leaderboard_row(i + 1, entry));
    }
    println!("{}", "─".repeat(60));
}
