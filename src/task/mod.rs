//! Simulated server-side work.
//!
//! # Data Flow
//! ```text
//! Scenario + tick → TaskParams
//!     → runner.rs (tick loop: check signal, check deadline, sleep)
//!     → TaskResult (completion or cancellation cause)
//!     → TaskReport (published by the HTTP handler)
//! ```
//!
//! # Design Decisions
//! - Cancellation is cooperative and observed only at tick boundaries
//! - Without stop-on-cancel a fired signal is noted and then ignored

pub mod runner;
pub mod types;

pub use runner::run_task;
pub use types::{TaskCompletion, TaskError, TaskParams, TaskReport, TaskResult};
