//! Runtime layer for the memory game.
//!
//! The core crate never reads a clock. This crate owns the wall-clock side:
//! a [`GameSession`] shares the game state with a tokio task that ticks the
//! countdown, and publishes game-over on a watch channel so a front end can
//! react to expiry while it is blocked waiting for input.
//!
//! Configuration comes from environment variables, see [`EngineConfig`].

pub mod config;
pub mod session;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use config::EngineConfig;
pub use session::GameSession;
