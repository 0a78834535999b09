//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! server, task, client, lifecycle
//!     → tracing events (request_id on every server task span)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;
