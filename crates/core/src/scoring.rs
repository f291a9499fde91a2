//! Scoring module - how a resolved turn changes the score
//!
//! | Resolution | Score change |
//! |------------|--------------|
//! | Match | +10 |
//! | Mismatch, neither tile seen before | 0 |
//! | Mismatch, at least one tile seen before | -2 |
//!
//! "Seen before" means the tile took part in an earlier resolved turn. The
//! flags are read before the current turn marks its tiles, so the first
//! mismatch involving a tile is always free.

use memory_match_types::{MATCH_POINTS, SEEN_PENALTY};

use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Match,
    Mismatch { penalty: bool },
}

impl Resolution {
    pub fn score_delta(self) -> i32 {
        match self {
            Resolution::Match => MATCH_POINTS,
            Resolution::Mismatch { penalty: true } => -SEEN_PENALTY,
            Resolution::Mismatch { penalty: false } => 0,
        }
    }
}

/// Resolve the two tiles of a turn, using their flags from before the turn.
pub fn evaluate_pair(first: &Tile, second: &Tile) -> Resolution {
    if first.symbol == second.symbol {
        Resolution::Match
    } else {
        Resolution::Mismatch {
            penalty: first.ever_seen || second.ever_seen,
        }
    }
}
