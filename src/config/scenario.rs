//! Scenario table and selector.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::config::schema::{DemoConfig, ScenarioConfig};

/// A race scenario with resolved durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub server_task_duration: Duration,
    pub client_timeout: Duration,
    pub stop_on_client_cancel: bool,
}

impl From<&ScenarioConfig> for Scenario {
    fn from(config: &ScenarioConfig) -> Self {
        Self {
            name: config.name.clone(),
            server_task_duration: Duration::from_millis(config.server_task_ms),
            client_timeout: Duration::from_millis(config.client_timeout_ms),
            stop_on_client_cancel: config.stop_on_client_cancel,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("invalid scenario index {index}: expected 0..{len}")]
    InvalidIndex { index: i64, len: usize },
}

/// Ordered, read-only list of scenarios.
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    scenarios: Vec<Scenario>,
}

impl ScenarioTable {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            scenarios: config.scenarios.iter().map(Scenario::from).collect(),
        }
    }

    /// Pick a scenario by zero-based index.
    ///
    /// The index is signed so that a negative CLI argument is rejected here
    /// instead of failing to parse.
    pub fn select(&self, index: i64) -> Result<&Scenario, ScenarioError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.scenarios.get(i))
            .ok_or(ScenarioError::InvalidIndex {
                index,
                len: self.scenarios.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_shipped_scenarios() {
        let table = ScenarioTable::from_config(&DemoConfig::default());
        assert_eq!(table.len(), 3);

        let first = table.select(0).unwrap();
        assert_eq!(first.server_task_duration, Duration::from_secs(5));
        assert_eq!(first.client_timeout, Duration::from_secs(10));
        assert!(!first.stop_on_client_cancel);

        let last = table.select(2).unwrap();
        assert_eq!(last.client_timeout, Duration::from_secs(2));
        assert!(last.stop_on_client_cancel);
    }

    #[test]
    fn test_out_of_range_fails_fast() {
        let table = ScenarioTable::from_config(&DemoConfig::default());
        assert_eq!(
            table.select(3),
            Err(ScenarioError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(
            table.select(-1),
            Err(ScenarioError::InvalidIndex { index: -1, len: 3 })
        );
        assert!(table
            .select(i64::MAX)
            .unwrap_err()
            .to_string()
            .starts_with("invalid scenario index"));
    }
}
