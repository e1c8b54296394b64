//! Gameplay state
//!
//! Everything between a generated level and the screen: the masked grid the
//! player sees, the guess-by-guess session bookkeeping, and the streak
//! tracker feeding the leaderboard. No terminal I/O lives here; the command
//! and TUI front-ends drive these types.

mod hidden;
mod session;
mod streak;

pub use hidden::{HiddenGrid, MASK};
pub use session::{GameSession, GuessOutcome, STARTING_LIVES};
pub use streak::StreakTracker;
