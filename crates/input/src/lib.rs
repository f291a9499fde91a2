//! Text input module (engine-facing).
//!
//! The game is played by typing one command per line. This crate maps those
//! lines into [`crate::types::GameAction`] and is independent of how the
//! lines are read.

pub mod map;

pub use memory_match_types as types;

pub use map::{parse_command, should_quit, InputError};
