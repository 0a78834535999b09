//! Race orchestration.
//!
//! # Responsibilities
//! - Start the server on an already-bound listener
//! - Fire the client after the startup delay
//! - Collect the client result and the server task report
//! - Shut the server down and join it
//!
//! # Design Decisions
//! - The listener is bound before the server task is spawned, so connections
//!   queue in the backlog even if the client fires early
//! - Every wait is bounded; the race always terminates

use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time;
use thiserror::Error;

use crate::config::{DemoConfig, Scenario};
use crate::http::{client, ClientError, ClientResponse, HttpServer};
use crate::lifecycle::Shutdown;
use crate::task::{TaskParams, TaskReport};

#[derive(Debug, Error)]
pub enum RaceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// What both sides observed during one race.
#[derive(Debug)]
pub struct RaceReport {
    pub scenario: Scenario,
    pub client: Result<ClientResponse, ClientError>,
    /// `None` if the server task did not report within the wait window.
    pub server: Option<TaskReport>,
}

/// Run one scenario: server on `listener`, one client call against it.
pub async fn run_race(
    config: &DemoConfig,
    scenario: &Scenario,
    listener: TcpListener,
) -> Result<RaceReport, RaceError> {
    let addr = listener.local_addr()?;
    let tick = config.timing.tick();
    let params = TaskParams::from_scenario(scenario, tick);

    let (reports_tx, mut reports_rx) = mpsc::unbounded_channel();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(params, reports_tx);
    let server_handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    time::sleep(config.timing.startup_delay()).await;

    let url = client::target_url(addr);
    tracing::info!(
        url = %url,
        timeout_ms = scenario.client_timeout.as_millis() as u64,
        "client start"
    );
    let client_result = client::call(&url, scenario.client_timeout).await;
    match &client_result {
        Ok(response) => tracing::info!(status = %response.status, "client finished"),
        Err(e) => tracing::warn!(error = %e, "client failed"),
    }

    let report_wait = scenario.server_task_duration + tick + config.timing.drain_grace();
    let server_report = match time::timeout(report_wait, reports_rx.recv()).await {
        Ok(report) => report,
        Err(_) => {
            tracing::warn!(wait_ms = report_wait.as_millis() as u64, "no server task report");
            None
        }
    };

    shutdown.trigger();
    match time::timeout(config.timing.drain_grace(), server_handle).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!("server did not stop within drain grace"),
    }

    Ok(RaceReport {
        scenario: scenario.clone(),
        client: client_result,
        server: server_report,
    })
}
