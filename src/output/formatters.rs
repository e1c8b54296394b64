//! Formatting utilities for terminal output

use crate::leaderboard::LeaderboardEntry;

/// Date column value for a leaderboard row
///
/// Timestamps are stored as `YYYY-MM-DD HH:MM:SS`; the table shows only the
/// date part. An entry without a timestamp shows as `Unknown`.
#[must_use]
pub fn entry_date(timestamp: &str) -> &str {
    timestamp.split_whitespace().next().unwrap_or("Unknown")
}

/// Player name trimmed to fit the leaderboard name column
#[must_use]
pub fn display_name(name: &str) -> String {
    name.chars().take(14).collect()
}

/// The leaderboard table header row
#[must_use]
pub fn leaderboard_header() -> String {
    format!(
        "{:<6}{:<15}{:<8}{:<8}{:<15}",
        "Rank", "Name", "Streak", "Points", "Date"
    )
}

/// Format one leaderboard table row (ranks start at 1)
#[must_use]
pub fn leaderboard_row(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{:<6}{:<15}{:<8}{:<8}{:<15}",
        rank,
        display_name(&entry.player_name),
        entry.streak_length,
        entry.total_points,
        entry_date(&entry.timestamp)
    )
}
