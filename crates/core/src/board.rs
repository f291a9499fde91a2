//! Board module - the deck of tiles
//!
//! The board is an ordered sequence of `2 × pairs` tiles. Each symbol appears
//! on exactly two tiles. Indices are stable for the lifetime of a deal; a
//! restart replaces the whole sequence.
//!
//! The board only knows about tile flags. Turn limits, scoring and game over
//! are the turn engine's concern (see [`crate::game_state`]).

use std::collections::HashMap;

use crate::rng::SimpleRng;
use crate::tile::{symbol_for_pair, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("index {index} out of range for board of {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("symbol {symbol:?} appears {count} times, expected 2")]
    UnpairedSymbol { symbol: char, count: usize },
    #[error("a board needs at least one pair")]
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Deal a shuffled board of `pairs` pairs.
    pub fn new(pairs: usize, rng: &mut SimpleRng) -> Self {
        let mut board = Self {
            tiles: Vec::with_capacity(pairs * 2),
        };
        board.initialize(pairs, rng);
        board
    }

    /// Build a board with a fixed layout.
    ///
    /// Every symbol must appear exactly twice.
    pub fn from_symbols(symbols: &[char]) -> Result<Self, BoardError> {
        if symbols.is_empty() {
            return Err(BoardError::Empty);
        }

        let mut counts: HashMap<char, usize> = HashMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        // Report the first offending symbol in layout order.
        for &symbol in symbols {
            let count = counts[&symbol];
            if count != 2 {
                return Err(BoardError::UnpairedSymbol { symbol, count });
            }
        }

        Ok(Self {
            tiles: symbols.iter().copied().map(Tile::new).collect(),
        })
    }

    /// Replace all tiles with a fresh shuffled deal.
    pub fn initialize(&mut self, pairs: usize, rng: &mut SimpleRng) {
        self.tiles.clear();
        for n in 0..pairs {
            let symbol = symbol_for_pair(n);
            self.tiles.push(Tile::new(symbol));
            self.tiles.push(Tile::new(symbol));
        }
        rng.shuffle(&mut self.tiles);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Bounds-checked lookup
    pub fn tile_at(&self, index: usize) -> Result<&Tile, BoardError> {
        self.tiles.get(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    /// Turn a tile face up. Turn limits are not checked here.
    /// Returns false if out of bounds
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.face_up = true;
                true
            }
            None => false,
        }
    }

    /// Turn every face-up tile that is not matched back down.
    pub fn hide_unmatched(&mut self) {
        for tile in self.tiles.iter_mut().filter(|t| t.face_up && !t.matched) {
            tile.face_up = false;
        }
    }

    pub fn count_face_up_with_symbol(&self, symbol: char) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.face_up && t.symbol == symbol)
            .count()
    }

    /// Number of tiles that are face up but not yet matched.
    pub fn pending_face_up(&self) -> usize {
        self.tiles.iter().filter(|t| t.face_up && !t.matched).count()
    }

    /// Confirm a tile as part of a found pair. Matched tiles stay face up.
    /// Returns false if out of bounds
    pub fn mark_matched(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.matched = true;
                tile.face_up = true;
                true
            }
            None => false,
        }
    }

    /// Returns false if out of bounds
    pub fn mark_seen(&mut self, index: usize) -> bool {
        match self.tiles.get_mut(index) {
            Some(tile) => {
                tile.ever_seen = true;
                true
            }
            None => false,
        }
    }

    pub fn all_matched(&self) -> bool {
        self.tiles.iter().all(|t| t.matched)
    }

    /// Indices of the two tiles carrying `symbol`.
    pub fn positions_of(&self, symbol: char) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.symbol == symbol)
            .map(|(i, _)| i)
            .collect()
    }
}
