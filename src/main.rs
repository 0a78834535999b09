//! Client timeout vs. server task race
//!
//! Runs an HTTP server and a single client call in one process to show how a
//! client-side timeout interacts with a long-running server task.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────┐   GET / (timeout)    ┌──────────────┐
//!   │ client call  │ ───────────────────▶ │ axum handler │
//!   │ (reqwest)    │ ◀─────────────────── │              │
//!   └──────────────┘   200 / 500 JSON     └──────┬───────┘
//!          │                                      │ spawn + CancelOnDrop
//!          │ timeout → drop connection            ▼
//!          └──────────────▶ CancelSignal ──▶ server task (tick loop)
//!                                                 │
//!                                                 ▼
//!                                         TaskReport channel
//! ```
//!
//! # Scenarios
//! - 0: task 5s, timeout 10s, keep working on cancel → 200 success
//! - 1: task 5s, timeout 2s, keep working on cancel → client times out, task completes
//! - 2: task 5s, timeout 2s, stop on cancel → client times out, task canceled

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use deadline_race::config::{load_config, DemoConfig, ScenarioTable};
use deadline_race::lifecycle::{run_race, wait_for_interrupt, RaceReport};
use deadline_race::observability::logging;

#[derive(Parser)]
#[command(name = "deadline-race")]
#[command(about = "Race a client timeout against a long-running server task", long_about = None)]
struct Cli {
    /// Zero-based scenario index
    #[arg(allow_negative_numbers = true)]
    index: i64,

    /// TOML file overriding listener, timing and the scenario table
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(logging::DEFAULT_FILTER);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };

    let table = ScenarioTable::from_config(&config);
    let scenario = table.select(cli.index)?;
    println!("selected scenario: {}", scenario);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        tick_ms = config.timing.tick_ms,
        server_task_ms = scenario.server_task_duration.as_millis() as u64,
        client_timeout_ms = scenario.client_timeout.as_millis() as u64,
        stop_on_client_cancel = scenario.stop_on_client_cancel,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    tokio::select! {
        report = run_race(&config, scenario, listener) => print_report(&report?),
        _ = wait_for_interrupt() => {
            println!("interrupted");
        }
    }

    Ok(())
}

fn print_report(report: &RaceReport) {
    match &report.client {
        Ok(response) => {
            println!("response body: {}", response.body);
            println!("response status: {}", response.status);
        }
        Err(e) => println!("client error: {}", e),
    }

    match &report.server {
        Some(task) => match &task.outcome {
            Ok(done) => println!(
                "server task completed after {:?} (cancel observed: {})",
                done.elapsed, done.cancel_observed
            ),
            Err(e) => println!("server task canceled: {}", e),
        },
        None => println!("server task did not report"),
    }
}
