//! Client timeout vs. server task cancellation race demo library

pub mod cancel;
pub mod config;
pub mod context;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod task;

pub use config::{DemoConfig, Scenario, ScenarioTable};
pub use http::HttpServer;
pub use lifecycle::{run_race, RaceReport, Shutdown};
