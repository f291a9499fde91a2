//! A single card on the board.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub symbol: char,
    pub face_up: bool,
    /// Set when the tile has been part of a resolved turn.
    pub ever_seen: bool,
    /// Permanent once the pair is confirmed.
    pub matched: bool,
}

impl Tile {
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            face_up: false,
            ever_seen: false,
            matched: false,
        }
    }

    /// Face down, unseen and unmatched.
    pub fn is_fresh(&self) -> bool {
        !self.face_up && !self.ever_seen && !self.matched
    }
}

/// Symbol for the `n`th pair of a deal.
///
/// `A..=Z`, then `a..=z`, then `0..=9`, then whatever scalar values follow.
pub fn symbol_for_pair(n: usize) -> char {
    const UPPER: usize = 26;
    const LOWER: usize = 26;
    const DIGITS: usize = 10;

    let (base, offset) = if n < UPPER {
        ('A', n)
    } else if n < UPPER + LOWER {
        ('a', n - UPPER)
    } else if n < UPPER + LOWER + DIGITS {
        ('0', n - UPPER - LOWER)
    } else {
        ('\u{00C0}', n - UPPER - LOWER - DIGITS)
    };

    char::from_u32(base as u32 + offset as u32).unwrap_or('?')
}
