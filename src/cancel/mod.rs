//! Cooperative cancellation.
//!
//! # Data Flow
//! ```text
//! request future dropped (client gone) ─┐
//! deadline timer elapsed ───────────────┼─▶ CancelSignal (fires once)
//! explicit cancel() ────────────────────┘        │
//!                                                ▼
//!                                   server task polls each tick
//! ```

pub mod signal;

pub use signal::{CancelCause, CancelOnDrop, CancelSignal};
