use serde::Serialize;

use crate::tile::Tile;
use crate::types::{GameOutcome, TurnPhase, FLIPS_PER_TURN, GAME_DURATION_SECS};

/// What an adapter may show for one tile. Hidden tiles carry no symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    pub index: usize,
    pub symbol: Option<char>,
    pub face_up: bool,
    pub matched: bool,
}

impl TileSnapshot {
    pub fn from_tile(index: usize, tile: &Tile) -> Self {
        Self {
            index,
            symbol: tile.face_up.then_some(tile.symbol),
            face_up: tile.face_up,
            matched: tile.matched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub score: i32,
    pub matches_found: usize,
    pub total_pairs: usize,
    pub flips_remaining: u8,
    pub attempts: u32,
    pub elapsed_seconds: u32,
    pub duration_seconds: u32,
    pub phase: TurnPhase,
    pub outcome: GameOutcome,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.score = 0;
        self.matches_found = 0;
        self.total_pairs = 0;
        self.flips_remaining = FLIPS_PER_TURN;
        self.attempts = 0;
        self.elapsed_seconds = 0;
        self.duration_seconds = GAME_DURATION_SECS;
        self.phase = TurnPhase::AwaitingFirstFlip;
        self.outcome = GameOutcome::InProgress;
        self.episode_id = 0;
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.duration_seconds.saturating_sub(self.elapsed_seconds)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            score: 0,
            matches_found: 0,
            total_pairs: 0,
            flips_remaining: FLIPS_PER_TURN,
            attempts: 0,
            elapsed_seconds: 0,
            duration_seconds: GAME_DURATION_SECS,
            phase: TurnPhase::AwaitingFirstFlip,
            outcome: GameOutcome::InProgress,
            episode_id: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_tile_has_no_symbol() {
        let tile = Tile::new('Q');
        let snap = TileSnapshot::from_tile(3, &tile);
        assert_eq!(snap.index, 3);
        assert_eq!(snap.symbol, None);
        assert!(!snap.face_up);
    }

    #[test]
    fn test_face_up_tile_shows_symbol() {
        let tile = Tile {
            face_up: true,
            ..Tile::new('Q')
        };
        assert_eq!(TileSnapshot::from_tile(0, &tile).symbol, Some('Q'));
    }

    #[test]
    fn test_default_snapshot_in_progress() {
        let snap = GameSnapshot::default();
        assert!(!snap.is_over());
        assert_eq!(snap.remaining_seconds(), GAME_DURATION_SECS);
        assert_eq!(snap.flips_remaining, FLIPS_PER_TURN);
    }

    #[test]
    fn test_clear_restores_default() {
        let mut snap = GameSnapshot {
            tiles: vec![TileSnapshot::from_tile(0, &Tile::new('A'))],
            score: -4,
            matches_found: 3,
            total_pairs: 6,
            flips_remaining: 1,
            attempts: 9,
            elapsed_seconds: 42,
            duration_seconds: 90,
            phase: TurnPhase::Won,
            outcome: GameOutcome::Won,
            episode_id: 5,
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
    }
}
