//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → Spawn server → Startup delay → Client call
//!     → Await server task report → Trigger shutdown → Join server
//!
//! Shutdown (shutdown.rs):
//!     trigger() → axum graceful shutdown → server task exits
//!
//! Signals (signals.rs):
//!     SIGINT → binary abandons the race
//! ```
//!
//! # Design Decisions
//! - The listener is ready before the client fires
//! - Shutdown has timeout: the server join is bounded by the drain grace

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::wait_for_interrupt;
pub use startup::{run_race, RaceError, RaceReport};
