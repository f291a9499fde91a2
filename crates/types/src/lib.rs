//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game: the
//! actions an adapter can send, the outcomes the turn engine reports back, and
//! the rule constants. Everything here is plain data so it can be shared by the
//! core engine, the runtime, the terminal view and the JSON observation.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_PAIRS` | 6 | Pairs dealt when no count is configured |
//! | `MAX_PAIRS` | 64 | Upper bound accepted from configuration |
//! | `FLIPS_PER_TURN` | 2 | Reveals allowed before a turn resolves |
//! | `MATCH_POINTS` | 10 | Awarded for every confirmed pair |
//! | `SEEN_PENALTY` | 2 | Deducted when a mismatch involves a seen tile |
//! | `GAME_DURATION_SECS` | 60 | Countdown length |
//! | `TICK_MS` | 1000 | Countdown tick period |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{GameAction, GameOutcome, TurnPhase};
//!
//! let action = GameAction::from_str("restart").unwrap();
//! assert_eq!(action, GameAction::Restart);
//!
//! assert_eq!(TurnPhase::Won.outcome(), GameOutcome::Won);
//! assert!(TurnPhase::Quit.is_terminal());
//! ```

use serde::Serialize;

/// Pairs dealt when no count is configured.
pub const DEFAULT_PAIRS: usize = 6;

/// Largest pair count accepted from configuration.
pub const MAX_PAIRS: usize = 64;

/// Number of reveals in one turn.
pub const FLIPS_PER_TURN: u8 = 2;

/// Points awarded for a confirmed pair.
pub const MATCH_POINTS: i32 = 10;

/// Points deducted for a mismatch that re-reveals a seen tile.
pub const SEEN_PENALTY: i32 = 2;

/// Countdown length in seconds.
pub const GAME_DURATION_SECS: u32 = 60;

/// Countdown tick period in milliseconds.
pub const TICK_MS: u64 = 1000;

/// A request from an adapter to the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Reveal the tile at the given board index.
    Flip(usize),
    Restart,
    Quit,
}

impl GameAction {
    /// Parse an action name (case-insensitive).
    ///
    /// A bare non-negative number is a flip of that tile.
    ///
    /// ```
    /// use memory_match_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("7"), Some(GameAction::Flip(7)));
    /// assert_eq!(GameAction::from_str("Q"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("-1"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "r" | "restart" => Some(GameAction::Restart),
            "q" | "quit" => Some(GameAction::Quit),
            other => other.parse::<usize>().ok().map(GameAction::Flip),
        }
    }
}

/// Where the turn state machine currently is.
///
/// `Resolving` is only held for the duration of a second flip; callers
/// observe it as `AwaitingFirstFlip` or one of the terminal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnPhase {
    AwaitingFirstFlip,
    AwaitingSecondFlip,
    Resolving,
    Won,
    TimeExpired,
    Quit,
}

impl TurnPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Won | TurnPhase::TimeExpired | TurnPhase::Quit)
    }

    pub fn outcome(self) -> GameOutcome {
        match self {
            TurnPhase::Won => GameOutcome::Won,
            TurnPhase::TimeExpired => GameOutcome::TimeExpired,
            TurnPhase::Quit => GameOutcome::Quit,
            TurnPhase::AwaitingFirstFlip
            | TurnPhase::AwaitingSecondFlip
            | TurnPhase::Resolving => GameOutcome::InProgress,
        }
    }
}

/// Overall result of a game as seen by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    TimeExpired,
    Quit,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "inProgress",
            GameOutcome::Won => "won",
            GameOutcome::TimeExpired => "timeExpired",
            GameOutcome::Quit => "quit",
        }
    }
}

/// Result of an accepted flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum TurnOutcome {
    /// First reveal of a turn; waiting for its partner.
    FirstFlipAccepted,
    /// The two revealed tiles share a symbol.
    MatchFound,
    /// The two revealed tiles differ and were hidden again.
    NoMatch { penalty_applied: bool },
    /// The final pair was matched.
    GameWon,
    /// The game had already finished when the request arrived.
    AlreadyOver,
}

impl TurnOutcome {
    /// Score change this outcome carried.
    pub fn score_delta(self) -> i32 {
        match self {
            TurnOutcome::MatchFound | TurnOutcome::GameWon => MATCH_POINTS,
            TurnOutcome::NoMatch {
                penalty_applied: true,
            } => -SEEN_PENALTY,
            TurnOutcome::NoMatch {
                penalty_applied: false,
            }
            | TurnOutcome::FirstFlipAccepted
            | TurnOutcome::AlreadyOver => 0,
        }
    }
}

/// A rejected flip. The game state is unchanged and the player may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FlipError {
    #[error("tile {index} does not exist (board has {len} tiles)")]
    TileIndexInvalid { index: usize, len: usize },
    #[error("tile {index} is already face up")]
    TileAlreadyFaceUp { index: usize },
    #[error("the game is over")]
    GameOver,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// The countdown is not running; nothing changed.
    Idle,
    /// One second elapsed and time remains.
    Running { elapsed_secs: u32 },
    /// This tick used up the last second.
    Expired,
}
