//! Shared utilities for integration testing.

use std::time::Duration;
use tokio::net::TcpListener;

use deadline_race::config::{DemoConfig, ScenarioConfig, ScenarioTable, TimingConfig};
use deadline_race::lifecycle::{run_race, RaceReport};

/// Upper bound for a whole race in tests.
pub const RACE_LIMIT: Duration = Duration::from_secs(15);

pub const TASK_MS: u64 = 600;
pub const SHORT_TIMEOUT_MS: u64 = 100;

/// The shipped scenario table scaled down to milliseconds.
pub fn fast_config() -> DemoConfig {
    let mut config = DemoConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.timing = TimingConfig {
        tick_ms: 10,
        startup_delay_ms: 20,
        drain_grace_ms: 500,
    };
    config.scenarios = vec![
        scenario("long timeout", TASK_MS, 3_000, false),
        scenario("short timeout, keep working", TASK_MS, SHORT_TIMEOUT_MS, false),
        scenario("short timeout, stop on cancel", TASK_MS, SHORT_TIMEOUT_MS, true),
    ];
    config
}

fn scenario(name: &str, server_task_ms: u64, client_timeout_ms: u64, stop: bool) -> ScenarioConfig {
    ScenarioConfig {
        name: name.to_string(),
        server_task_ms,
        client_timeout_ms,
        stop_on_client_cancel: stop,
    }
}

/// Bind an ephemeral loopback listener.
pub async fn bind_local() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

/// Run scenario `index` of `config` under `RACE_LIMIT`.
pub async fn race(config: &DemoConfig, index: i64) -> RaceReport {
    let table = ScenarioTable::from_config(config);
    let scenario = table.select(index).unwrap();
    let listener = bind_local().await;

    tokio::time::timeout(RACE_LIMIT, run_race(config, scenario, listener))
        .await
        .expect("race did not finish in time")
        .expect("race failed")
}
