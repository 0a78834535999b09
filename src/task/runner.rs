//! Tick loop that races an absolute deadline against a cancellation signal.

use tokio::time::{self, Instant};

use crate::cancel::CancelSignal;
use crate::task::types::{TaskCompletion, TaskError, TaskParams, TaskResult};

/// Run the simulated unit of work.
///
/// The deadline is fixed once at start. On every tick the signal is checked
/// first: with `stop_on_cancel` a fired signal ends the task with its cause,
/// otherwise the task keeps going until the deadline has passed.
pub async fn run_task(params: &TaskParams, signal: &CancelSignal) -> TaskResult {
    let started = Instant::now();
    let end = started + params.duration;
    let mut cancel_observed = false;

    loop {
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "server task running"
        );

        if let Some(cause) = signal.cause() {
            if params.stop_on_cancel {
                let elapsed = started.elapsed();
                tracing::info!(%cause, elapsed_ms = elapsed.as_millis() as u64, "server task canceled");
                return Err(TaskError::Canceled { cause, elapsed });
            }
            if !cancel_observed {
                tracing::info!(%cause, "cancellation observed, finishing work anyway");
                cancel_observed = true;
            }
        }

        if Instant::now() > end {
            let elapsed = started.elapsed();
            tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                cancel_observed,
                "server task completed"
            );
            return Ok(TaskCompletion {
                elapsed,
                cancel_observed,
            });
        }

        time::sleep(params.tick).await;
    }
}
