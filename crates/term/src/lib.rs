//! Terminal rendering module.
//!
//! A small console front end for the memory game. [`GameView`] turns a
//! snapshot into styled lines without doing any I/O, [`messages`] holds the
//! player-facing text, and [`TerminalRenderer`] writes both out through
//! crossterm.

pub mod game_view;
pub mod messages;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use game_view::{GameView, Line, Rgb, Span, SpanStyle, DEFAULT_COLUMNS};
pub use messages::{flip_error_message, outcome_message, summary_lines, PROMPT};
pub use renderer::{encode_lines_into, TerminalRenderer};
