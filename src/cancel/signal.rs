//! One-shot broadcast cancellation signal.
//!
//! # Responsibilities
//! - Carry a cancellation cause alongside a unit of work
//! - Fire exactly once; later `cancel` calls are ignored
//! - Let any number of holders poll or await the signal
//!
//! # Design Decisions
//! - Built on a `tokio::sync::watch` channel holding `Option<CancelCause>`
//! - Deadlines are a spawned timer that fires `DeadlineExceeded`
//! - `CancelOnDrop` ties the signal to the lifetime of a request future

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;

/// Why a signal fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CancelCause {
    /// Explicit cancel, e.g. the client went away.
    #[error("request canceled")]
    Canceled,
    /// A deadline elapsed.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Cloneable handle to a shared cancellation state.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<Option<CancelCause>>>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Create a signal that fires `DeadlineExceeded` once `after` has elapsed.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_deadline(after: Duration) -> Self {
        let signal = Self::new();
        let weak = Arc::downgrade(&signal.tx);
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(tx) = weak.upgrade() {
                CancelSignal { tx }.cancel(CancelCause::DeadlineExceeded);
            }
        });
        signal
    }

    /// Fire the signal. Returns `false` if it had already fired.
    pub fn cancel(&self, cause: CancelCause) -> bool {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(cause);
            true
        })
    }

    /// The cause, if the signal has fired.
    pub fn cause(&self) -> Option<CancelCause> {
        *self.tx.borrow()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cause().is_some()
    }

    /// Wait until the signal fires and return its cause.
    pub async fn cancelled(&self) -> CancelCause {
        let mut rx = self.tx.subscribe();
        loop {
            if let Some(cause) = *rx.borrow_and_update() {
                return cause;
            }
            // The sender lives in `self`, so the channel cannot close here.
            if rx.changed().await.is_err() {
                return CancelCause::Canceled;
            }
        }
    }

    /// Guard that fires `Canceled` when dropped.
    pub fn drop_guard(&self) -> CancelOnDrop {
        CancelOnDrop {
            signal: Some(self.clone()),
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires the wrapped signal with `CancelCause::Canceled` on drop.
#[derive(Debug)]
pub struct CancelOnDrop {
    signal: Option<CancelSignal>,
}

impl CancelOnDrop {
    /// Drop the guard without firing the signal.
    pub fn disarm(mut self) {
        self.signal = None;
    }
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if let Some(signal) = self.signal.take() {
            signal.cancel(CancelCause::Canceled);
        }
    }
}
