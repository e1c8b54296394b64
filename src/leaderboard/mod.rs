//! Persistent leaderboard
//!
//! A JSON file of streak records, kept sorted by streak length then points.
//! A missing file is an empty board; an unreadable or corrupt file degrades
//! to an empty board with a warning and is only rewritten once a new entry
//! is actually added.

use chrono::Local;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Default location of the leaderboard file
pub const DEFAULT_PATH: &str = "leaderboard.json";

/// One recorded streak
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub streak_length: u32,
    pub total_points: u32,
    #[serde(default)]
    pub timestamp: String,
}

/// The leaderboard and the file backing it
#[derive(Debug)]
pub struct Leaderboard {
    path: PathBuf,
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Load the board from a file, falling back to an empty board
    ///
    /// Corruption never propagates: a file that cannot be read or parsed
    /// yields an empty board and a warning, and stays untouched on disk
    /// until an entry is added.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<LeaderboardEntry>>(&content) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("could not parse leaderboard {}: {err}", path.display());
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!("could not read leaderboard {}: {err}", path.display());
                Vec::new()
            }
        };

        let mut board = Self { path, entries };
        board.sort_entries();
        board
    }

    /// Record a streak and write the board back out
    pub fn add_entry(&mut self, player_name: &str, streak_length: u32, total_points: u32) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        self.entries.push(LeaderboardEntry {
            player_name: player_name.to_string(),
            streak_length,
            total_points,
            timestamp,
        });
        self.sort_entries();
        self.save();
    }

    fn sort_entries(&mut self) {
        // Descending by streak, points breaking ties; the sort is stable so
        // equal records keep insertion order
        self.entries
            .sort_by(|a, b| (b.streak_length, b.total_points).cmp(&(a.streak_length, a.total_points)));
    }

    fn save(&self) {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    warn!("could not save leaderboard {}: {err}", self.path.display());
                }
            }
            Err(err) => warn!("could not serialize leaderboard: {err}"),
        }
    }

    /// All entries, best first
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The best `limit` entries
    #[must_use]
    pub fn top_entries(&self, limit: usize) -> &[LeaderboardEntry] {
        &self.entries[..self.entries.len().min(limit)]
    }

    /// A player's best entry, matched case-insensitively
    #[must_use]
    pub fn personal_best(&self, player_name: &str) -> Option<&LeaderboardEntry> {
        let wanted = player_name.to_lowercase();
        // Entries stay sorted, so the first match is the best
        self.entries
            .iter()
            .find(|entry| entry.player_name.to_lowercase() == wanted)
    }
}
