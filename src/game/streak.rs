//! Winning-streak bookkeeping
//!
//! Counts consecutive wins and their accumulated points for one named
//! player, and decides when a run beats their leaderboard best.

use crate::leaderboard::Leaderboard;

/// A player's current run of wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakTracker {
    pub player_name: String,
    pub current_streak: u32,
    pub current_points: u32,
}

impl StreakTracker {
    /// Start with no player and no streak
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipe the run; the player name stays
    pub fn reset_streak(&mut self) {
        self.current_streak = 0;
        self.current_points = 0;
    }

    /// Count a won round and its points
    pub fn add_win(&mut self, points: u32) {
        self.current_streak += 1;
        self.current_points += points;
    }

    /// Whether the current run beats the player's best recorded entry
    ///
    /// A run with no prior entry is a record as soon as it has a win; ties
    /// on streak length fall to points.
    #[must_use]
    pub fn is_new_record(&self, leaderboard: &Leaderboard) -> bool {
        if self.player_name.is_empty() {
            return false;
        }

        match leaderboard.personal_best(&self.player_name) {
            None => self.current_streak > 0,
            Some(best) => {
                self.current_streak > best.streak_length
                    || (self.current_streak == best.streak_length
                        && self.current_points > best.total_points)
            }
        }
    }
}
