//! JSON observation output for scripted front ends.
//!
//! With `MEMORY_MATCH_OBSERVE` set, the binary prints one JSON object per line
//! instead of the styled board: the full snapshot, plus what the last command
//! did.

use anyhow::Result;
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::TurnOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObserveConfig {
    pub enabled: bool,
}

impl ObserveConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("MEMORY_MATCH_OBSERVE").ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        let enabled = value.is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            )
        });
        Self { enabled }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationMessage<'a> {
    #[serde(rename = "type")]
    pub msg_type: &'static str,
    pub seq: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<TurnOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub snapshot: &'a GameSnapshot,
}

/// Numbers observation lines in the order they are written.
#[derive(Debug, Default)]
pub struct Observer {
    seq: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(
        &mut self,
        snapshot: &GameSnapshot,
        last_event: Option<TurnOutcome>,
        error: Option<String>,
    ) -> Result<String> {
        self.seq += 1;
        observation_line(self.seq, snapshot, last_event, error)
    }
}

pub fn observation_line(
    seq: u64,
    snapshot: &GameSnapshot,
    last_event: Option<TurnOutcome>,
    error: Option<String>,
) -> Result<String> {
    let msg = ObservationMessage {
        msg_type: "observation",
        seq,
        last_event,
        error,
        snapshot,
    };
    Ok(serde_json::to_string(&msg)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_flag_values() {
        assert!(!ObserveConfig::from_value(None).enabled);
        assert!(!ObserveConfig::from_value(Some("0")).enabled);
        assert!(!ObserveConfig::from_value(Some("")).enabled);
        assert!(ObserveConfig::from_value(Some("1")).enabled);
        assert!(ObserveConfig::from_value(Some(" TRUE ")).enabled);
    }

    #[test]
    fn test_observer_numbers_lines() {
        let snap = GameSnapshot::default();
        let mut observer = Observer::new();
        let first = observer.line(&snap, None, None).unwrap();
        let second = observer.line(&snap, None, None).unwrap();
        assert!(first.contains("\"seq\":1"));
        assert!(second.contains("\"seq\":2"));
        assert!(!first.contains("lastEvent"));
    }
}
