//! Game state module - the turn engine
//!
//! This module ties together the board, the shuffle RNG, the countdown and the
//! scoring rules. It accepts one flip at a time, resolves a turn the instant
//! its second tile is revealed, and decides when the game is over (all pairs
//! found, countdown expired, or the player quit).
//!
//! # Turn state machine
//!
//! ```text
//! AwaitingFirstFlip --flip--> AwaitingSecondFlip --flip--> Resolving
//!        ^                                                     |
//!        +------------------ match / mismatch -----------------+
//!                                                              |
//!                                      Won (last pair) <-------+
//!
//! any non-terminal phase --countdown expired--> TimeExpired
//! any non-terminal phase --quit--> Quit
//! ```
//!
//! `restart` is legal from every phase, terminal ones included.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::board::{Board, BoardError};
use crate::rng::SimpleRng;
use crate::scoring::{evaluate_pair, Resolution};
use crate::snapshot::{GameSnapshot, TileSnapshot};
use crate::tile::Tile;
use crate::timer::CountdownTimer;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    /// Pair count every restart deals.
    pairs: usize,
    timer: CountdownTimer,
    phase: TurnPhase,
    /// Indices revealed in the current, unresolved turn.
    turn: ArrayVec<usize, 2>,
    flips_remaining: u8,
    matches_found: usize,
    score: i32,
    /// Number of resolved turns.
    attempts: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Deal a new game of `pairs` pairs with the default countdown.
    ///
    /// The countdown is running when this returns.
    pub fn new(pairs: usize, seed: u32) -> Self {
        Self::with_duration(pairs, GAME_DURATION_SECS, seed)
    }

    pub fn with_duration(pairs: usize, duration_secs: u32, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(pairs, &mut rng);
        let mut state = Self::from_parts(board, rng, duration_secs);
        state.timer.start();
        state
    }

    /// Start a game on a fixed layout instead of a shuffled deal.
    ///
    /// Restarts still deal shuffled boards with the same number of pairs.
    pub fn with_layout(symbols: &[char], duration_secs: u32) -> Result<Self, BoardError> {
        let board = Board::from_symbols(symbols)?;
        let mut state = Self::from_parts(board, SimpleRng::new(1), duration_secs);
        state.timer.start();
        Ok(state)
    }

    fn from_parts(board: Board, rng: SimpleRng, duration_secs: u32) -> Self {
        Self {
            pairs: board.pair_count(),
            board,
            rng,
            timer: CountdownTimer::new(duration_secs),
            phase: TurnPhase::AwaitingFirstFlip,
            turn: ArrayVec::new(),
            flips_remaining: FLIPS_PER_TURN,
            matches_found: 0,
            score: 0,
            attempts: 0,
            episode_id: 0,
        }
    }

    /// Deal a fresh board of `pairs` pairs and start the countdown.
    ///
    /// Later restarts reuse this pair count.
    pub fn initialize(&mut self, pairs: usize) {
        self.pairs = pairs;
        self.deal();
    }

    /// Start over with a reshuffled board, from any phase.
    pub fn restart(&mut self) {
        self.deal();
        debug!(
            episode_id = self.episode_id,
            pairs = self.pairs,
            "game restarted"
        );
    }

    fn deal(&mut self) {
        self.timer.stop();
        self.board.initialize(self.pairs, &mut self.rng);
        self.turn.clear();
        self.flips_remaining = FLIPS_PER_TURN;
        self.matches_found = 0;
        self.score = 0;
        self.attempts = 0;
        self.phase = TurnPhase::AwaitingFirstFlip;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.timer.start();
    }

    /// End the game at the player's request.
    ///
    /// A game that already finished keeps its outcome.
    pub fn quit(&mut self) {
        self.timer.stop();
        if !self.phase.is_terminal() {
            self.phase = TurnPhase::Quit;
            debug!(episode_id = self.episode_id, score = self.score, "game quit");
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            self.observe_expiry();
        }
        outcome
    }

    /// Move to `TimeExpired` if the countdown has run out.
    fn observe_expiry(&mut self) {
        if self.timer.is_expired() && !self.phase.is_terminal() {
            self.phase = TurnPhase::TimeExpired;
            debug!(
                episode_id = self.episode_id,
                score = self.score,
                pending = self.turn.len(),
                "countdown expired"
            );
        }
    }

    /// Reveal a tile.
    ///
    /// The first flip of a turn only reveals. The second resolves the turn
    /// immediately: a match stays face up and scores, a mismatch is hidden
    /// again and costs points if either tile was seen in an earlier turn.
    pub fn flip(&mut self, index: usize) -> Result<TurnOutcome, FlipError> {
        self.observe_expiry();
        if self.phase.is_terminal() {
            return Err(FlipError::GameOver);
        }

        let len = self.board.len();
        let tile = self
            .board
            .tile_at(index)
            .map_err(|_| FlipError::TileIndexInvalid { index, len })?;
        if tile.face_up {
            return Err(FlipError::TileAlreadyFaceUp { index });
        }

        let revealed = self.board.reveal(index);
        debug_assert!(revealed);
        self.flips_remaining = self.flips_remaining.saturating_sub(1);
        self.turn.push(index);

        if self.turn.len() < FLIPS_PER_TURN as usize {
            self.phase = TurnPhase::AwaitingSecondFlip;
            return Ok(TurnOutcome::FirstFlipAccepted);
        }

        self.phase = TurnPhase::Resolving;
        Ok(self.resolve_turn())
    }

    fn resolve_turn(&mut self) -> TurnOutcome {
        let (first, second) = (self.turn[0], self.turn[1]);
        let tiles = self.board.tiles();
        let resolution = evaluate_pair(&tiles[first], &tiles[second]);

        self.attempts = self.attempts.saturating_add(1);
        self.score += resolution.score_delta();
        for &index in &self.turn {
            self.board.mark_seen(index);
        }

        let outcome = match resolution {
            Resolution::Match => {
                let symbol = self.board.tiles()[first].symbol;
                debug_assert_eq!(self.board.count_face_up_with_symbol(symbol), 2);
                self.board.mark_matched(first);
                self.board.mark_matched(second);
                self.matches_found += 1;
                if self.matches_found == self.pairs {
                    TurnOutcome::GameWon
                } else {
                    TurnOutcome::MatchFound
                }
            }
            Resolution::Mismatch { penalty } => {
                self.board.hide_unmatched();
                TurnOutcome::NoMatch {
                    penalty_applied: penalty,
                }
            }
        };

        self.turn.clear();
        self.flips_remaining = FLIPS_PER_TURN;

        if outcome == TurnOutcome::GameWon {
            self.timer.stop();
            self.phase = TurnPhase::Won;
        } else {
            self.phase = TurnPhase::AwaitingFirstFlip;
        }

        debug!(
            first,
            second,
            ?outcome,
            score = self.score,
            matches = self.matches_found,
            "turn resolved"
        );
        outcome
    }

    /// Apply an adapter action.
    ///
    /// Flips report their outcome. Restart reports nothing. Quit reports
    /// `AlreadyOver` when the game had finished before it arrived.
    pub fn apply(&mut self, action: GameAction) -> Result<Option<TurnOutcome>, FlipError> {
        match action {
            GameAction::Flip(index) => self.flip(index).map(Some),
            GameAction::Restart => {
                self.restart();
                Ok(None)
            }
            GameAction::Quit => {
                let was_over = self.is_over();
                self.quit();
                Ok(was_over.then_some(TurnOutcome::AlreadyOver))
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    /// Indices revealed in the turn in progress.
    pub fn pending_turn(&self) -> &[usize] {
        &self.turn
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn matches_found(&self) -> usize {
        self.matches_found
    }

    pub fn total_pairs(&self) -> usize {
        self.pairs
    }

    pub fn flips_remaining(&self) -> u8 {
        self.flips_remaining
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn duration_seconds(&self) -> u32 {
        self.timer.duration_secs()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.timer.remaining_secs()
    }

    pub fn time_expired(&self) -> bool {
        self.timer.is_expired()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn outcome(&self) -> GameOutcome {
        self.phase.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.tiles.clear();
        out.tiles.extend(
            self.board
                .tiles()
                .iter()
                .enumerate()
                .map(|(i, t)| TileSnapshot::from_tile(i, t)),
        );
        out.score = self.score;
        out.matches_found = self.matches_found;
        out.total_pairs = self.pairs;
        out.flips_remaining = self.flips_remaining;
        out.attempts = self.attempts;
        out.elapsed_seconds = self.timer.elapsed_secs();
        out.duration_seconds = self.timer.duration_secs();
        out.phase = self.phase;
        out.outcome = self.outcome();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_PAIRS, 1)
    }
}
