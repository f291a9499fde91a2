//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the memory game: the deck, the turn
//! state machine, scoring, and the countdown as plain state. It has **no
//! dependencies** on terminals, async runtimes or wall clocks, making it:
//!
//! - **Deterministic**: the same seed deals the same boards, restarts included
//! - **Testable**: every rule is exercised by driving `flip`/`tick` directly
//! - **Portable**: any front end (terminal, GUI, headless) reads the same snapshot
//!
//! # Module Structure
//!
//! - [`board`]: the ordered tile sequence and its flag mutations
//! - [`game_state`]: the turn engine (flip, restart, quit, tick, snapshot)
//! - [`rng`]: seeded LCG and Fisher-Yates shuffle
//! - [`scoring`]: match/mismatch resolution and the seen penalty
//! - [`snapshot`]: read-only view handed to adapters
//! - [`tile`]: a single card and the symbol alphabet
//! - [`timer`]: the countdown, ticked from outside
//!
//! # Game Rules
//!
//! - A turn is two reveals. The second reveal resolves the turn at once.
//! - **Match**: both tiles stay face up for good, +10 points.
//! - **Mismatch**: both tiles are hidden again. -2 points if either of them
//!   had been revealed in an earlier turn, otherwise no change.
//! - The game is won when every pair is matched, and lost when the countdown
//!   (60 s by default) runs out first.
//!
//! # Example
//!
//! ```
//! use memory_match_core::GameState;
//! use memory_match_types::{GameOutcome, TurnOutcome};
//!
//! let mut game = GameState::with_layout(&['A', 'B', 'A', 'B'], 60).unwrap();
//!
//! assert_eq!(game.flip(0), Ok(TurnOutcome::FirstFlipAccepted));
//! assert_eq!(game.flip(2), Ok(TurnOutcome::MatchFound));
//! assert_eq!(game.score(), 10);
//!
//! game.flip(1).unwrap();
//! assert_eq!(game.flip(3), Ok(TurnOutcome::GameWon));
//! assert_eq!(game.outcome(), GameOutcome::Won);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Call [`GameState::tick`](game_state::GameState::tick)
//! once per elapsed second; the engine crate does this from a tokio task.

pub mod board;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tile;
pub mod timer;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use scoring::{evaluate_pair, Resolution};
pub use snapshot::{GameSnapshot, TileSnapshot};
pub use tile::{symbol_for_pair, Tile};
pub use timer::CountdownTimer;
