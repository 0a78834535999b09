//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the demo.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the race demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Tick, startup delay and drain settings.
    pub timing: TimingConfig,

    /// Ordered scenario table; selected by index at startup.
    pub scenarios: Vec<ScenarioConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timing knobs shared by every scenario.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Server task polling granularity in milliseconds.
    pub tick_ms: u64,

    /// Delay between spawning the server and firing the client, in milliseconds.
    pub startup_delay_ms: u64,

    /// Extra time to wait for the server task report once the client is done.
    pub drain_grace_ms: u64,
}

impl TimingConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn drain_grace(&self) -> Duration {
        Duration::from_millis(self.drain_grace_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1_000,
            startup_delay_ms: 2_000,
            drain_grace_ms: 1_000,
        }
    }
}

/// One entry of the scenario table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Descriptive label printed at startup.
    pub name: String,

    /// How long the server task works, in milliseconds.
    pub server_task_ms: u64,

    /// Client request timeout in milliseconds.
    pub client_timeout_ms: u64,

    /// Stop the server task as soon as the client goes away.
    #[serde(default)]
    pub stop_on_client_cancel: bool,
}

fn default_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: "server task duration > client timeout".to_string(),
            server_task_ms: 5_000,
            client_timeout_ms: 10_000,
            stop_on_client_cancel: false,
        },
        ScenarioConfig {
            name: "server task duration < client timeout, not stop when client cancel"
                .to_string(),
            server_task_ms: 5_000,
            client_timeout_ms: 2_000,
            stop_on_client_cancel: false,
        },
        ScenarioConfig {
            name: "server task duration > client timeout, stop when client cancel".to_string(),
            server_task_ms: 5_000,
            client_timeout_ms: 2_000,
            stop_on_client_cancel: true,
        },
    ]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            timing: TimingConfig::default(),
            scenarios: default_scenarios(),
        }
    }
}
