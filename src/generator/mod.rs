//! Level generation
//!
//! Turns a word list into a playable puzzle: pick a main word, lay it on the
//! diagonal, then interlock sub-words around it until the layout is dense
//! enough to play.

mod config;
mod engine;
mod layout;
mod validator;

pub use config::LevelConfig;
pub use engine::{GenerationError, Level, LevelGenerator};
pub use layout::Layout;
pub use validator::{can_place_horizontal, can_place_vertical};
