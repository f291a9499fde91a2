//! Session configuration from environment variables.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::types::{DEFAULT_PAIRS, GAME_DURATION_SECS, MAX_PAIRS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub pairs: usize,
    pub duration_secs: u32,
    pub seed: u32,
    /// Wall-clock length of one countdown second.
    pub tick_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            duration_secs: GAME_DURATION_SECS,
            seed: time_seed(),
            tick_interval: Duration::from_millis(TICK_MS),
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `MEMORY_MATCH_PAIRS`: pair count, clamped to `1..=MAX_PAIRS` (default 6)
    /// - `MEMORY_MATCH_DURATION_SECS`: countdown length, at least 1 (default 60)
    /// - `MEMORY_MATCH_SEED`: shuffle seed (default derived from the clock)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let pairs = parse_var(&lookup, "MEMORY_MATCH_PAIRS")
            .map(|p: usize| {
                let clamped = p.clamp(1, MAX_PAIRS);
                if clamped != p {
                    warn!(requested = p, used = clamped, "MEMORY_MATCH_PAIRS out of range");
                }
                clamped
            })
            .unwrap_or(defaults.pairs);

        let duration_secs = parse_var(&lookup, "MEMORY_MATCH_DURATION_SECS")
            .map(|d: u32| {
                let clamped = d.max(1);
                if clamped != d {
                    warn!(requested = d, used = clamped, "MEMORY_MATCH_DURATION_SECS out of range");
                }
                clamped
            })
            .unwrap_or(defaults.duration_secs);

        let seed = parse_var(&lookup, "MEMORY_MATCH_SEED").unwrap_or(defaults.seed);

        Self {
            pairs,
            duration_secs,
            seed,
            tick_interval: defaults.tick_interval,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = raw, "ignoring unparsable setting");
            None
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
