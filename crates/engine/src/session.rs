//! Live game session.
//!
//! Wraps a [`GameState`] in a mutex shared with a tokio task that ticks the
//! countdown once per `tick_interval`. Every tick re-checks the episode id
//! under the lock, so a ticker left over from before a restart can never
//! advance the new game's clock.
//!
//! Must be created inside a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, trace};

use crate::config::EngineConfig;
use crate::core::{GameSnapshot, GameState};
use crate::types::{FlipError, GameAction, GameOutcome, TickOutcome, TurnOutcome};

type SharedState = Arc<Mutex<GameState>>;

pub struct GameSession {
    state: SharedState,
    outcome_tx: Arc<watch::Sender<GameOutcome>>,
    ticker: Option<JoinHandle<()>>,
    tick_interval: Duration,
}

impl GameSession {
    /// Deal a game from `config` and start its countdown.
    pub fn start(config: &EngineConfig) -> Self {
        let state = GameState::with_duration(config.pairs, config.duration_secs, config.seed);
        info!(
            pairs = config.pairs,
            duration_secs = config.duration_secs,
            seed = config.seed,
            "session started"
        );
        Self::from_state(state, config.tick_interval)
    }

    /// Drive an existing game. The ticker starts if its countdown is running.
    pub fn from_state(state: GameState, tick_interval: Duration) -> Self {
        let running = state.timer_running();
        let (outcome_tx, _) = watch::channel(state.outcome());
        let mut session = Self {
            state: Arc::new(Mutex::new(state)),
            outcome_tx: Arc::new(outcome_tx),
            ticker: None,
            tick_interval,
        };
        if running {
            session.spawn_ticker();
        }
        session
    }

    pub fn flip(&mut self, index: usize) -> Result<TurnOutcome, FlipError> {
        let (result, outcome) = {
            let mut game = lock(&self.state);
            let result = game.flip(index);
            (result, game.outcome())
        };
        if outcome.is_over() {
            self.finish(outcome);
        }
        result
    }

    /// Deal a new board and restart the countdown, from any phase.
    pub fn restart(&mut self) {
        self.stop_ticker();
        let episode_id = {
            let mut game = lock(&self.state);
            game.restart();
            game.episode_id()
        };
        info!(episode_id, "session restarted");
        self.outcome_tx.send_replace(GameOutcome::InProgress);
        self.spawn_ticker();
    }

    pub fn quit(&mut self) {
        let outcome = {
            let mut game = lock(&self.state);
            game.quit();
            game.outcome()
        };
        self.finish(outcome);
    }

    pub fn apply(&mut self, action: GameAction) -> Result<Option<TurnOutcome>, FlipError> {
        match action {
            GameAction::Flip(index) => self.flip(index).map(Some),
            GameAction::Restart => {
                self.restart();
                Ok(None)
            }
            GameAction::Quit => {
                let was_over = self.outcome().is_over();
                self.quit();
                Ok(was_over.then_some(TurnOutcome::AlreadyOver))
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        lock(&self.state).snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        lock(&self.state).snapshot_into(out);
    }

    pub fn outcome(&self) -> GameOutcome {
        lock(&self.state).outcome()
    }

    /// Outcome changes: game over from any cause, and back to in-progress on restart.
    pub fn subscribe(&self) -> watch::Receiver<GameOutcome> {
        self.outcome_tx.subscribe()
    }

    /// Read the game under the session lock.
    pub fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&lock(&self.state))
    }

    /// True while a ticker task is alive.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.stop_ticker();
        let changed = self.outcome_tx.send_if_modified(|current| {
            if *current == outcome {
                false
            } else {
                *current = outcome;
                true
            }
        });
        if changed {
            info!(outcome = outcome.as_str(), "game over");
        }
    }

    fn spawn_ticker(&mut self) {
        self.stop_ticker();
        let episode_id = lock(&self.state).episode_id();
        let ticker = run_ticker(
            Arc::clone(&self.state),
            Arc::clone(&self.outcome_tx),
            episode_id,
            self.tick_interval,
        );
        self.ticker = Some(tokio::spawn(ticker));
    }

    fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

async fn run_ticker(
    state: SharedState,
    outcome_tx: Arc<watch::Sender<GameOutcome>>,
    episode_id: u32,
    period: Duration,
) {
    let mut interval = time::interval_at(Instant::now() + period, period);
    loop {
        interval.tick().await;

        let (tick, outcome) = {
            let mut game = lock(&state);
            if game.episode_id() != episode_id {
                debug!(episode_id, "stale ticker exiting");
                return;
            }
            let tick = game.tick();
            (tick, game.outcome())
        };

        match tick {
            TickOutcome::Running { elapsed_secs } => trace!(episode_id, elapsed_secs, "tick"),
            TickOutcome::Expired => {
                info!(episode_id, "time's up");
                outcome_tx.send_replace(outcome);
                return;
            }
            TickOutcome::Idle => return,
        }
    }
}

/// A panic while holding the lock leaves the game readable; keep going.
fn lock(state: &Mutex<GameState>) -> MutexGuard<'_, GameState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TurnPhase;

    fn session(symbols: &[char], duration_secs: u32) -> GameSession {
        let state = GameState::with_layout(symbols, duration_secs).unwrap();
        GameSession::from_state(state, Duration::from_secs(1))
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_advance_elapsed() {
        let s = session(&['A', 'B', 'A', 'B'], 60);
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(s.snapshot().elapsed_seconds, 2);
        assert!(s.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_publishes_outcome() {
        let mut s = session(&['A', 'B', 'A', 'B'], 3);
        let mut rx = s.subscribe();
        s.flip(0).unwrap();

        time::sleep(Duration::from_millis(3500)).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), GameOutcome::TimeExpired);
        assert_eq!(s.flip(2), Err(FlipError::GameOver));
        assert_eq!(s.snapshot().elapsed_seconds, 3);
        assert!(!s.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_win_stops_ticker() {
        let mut s = session(&['A', 'A'], 60);
        let rx = s.subscribe();
        s.flip(0).unwrap();
        assert_eq!(s.flip(1), Ok(TurnOutcome::GameWon));
        assert_eq!(*rx.borrow(), GameOutcome::Won);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(s.snapshot().elapsed_seconds, 0);
        assert!(!s.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_discards_old_ticker() {
        let mut s = session(&['A', 'B', 'A', 'B'], 3);
        time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(s.snapshot().elapsed_seconds, 2);

        s.restart();
        // The old ticker would have fired at 3.0s and expired the game.
        time::sleep(Duration::from_millis(700)).await;
        let snap = s.snapshot();
        assert_eq!(snap.elapsed_seconds, 0);
        assert_eq!(snap.phase, TurnPhase::AwaitingFirstFlip);

        time::sleep(Duration::from_millis(500)).await;
        assert_eq!(s.snapshot().elapsed_seconds, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_then_restart() {
        let mut s = session(&['A', 'B', 'A', 'B'], 60);
        let rx = s.subscribe();
        assert_eq!(s.apply(GameAction::Quit), Ok(None));
        assert_eq!(*rx.borrow(), GameOutcome::Quit);
        assert_eq!(s.apply(GameAction::Quit), Ok(Some(TurnOutcome::AlreadyOver)));

        assert_eq!(s.apply(GameAction::Restart), Ok(None));
        assert_eq!(*rx.borrow(), GameOutcome::InProgress);
        assert!(s.is_ticking());
        assert_eq!(s.with_state(|g| g.episode_id()), 1);
    }
}
