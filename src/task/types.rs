//! Server task inputs, outcomes and error definitions.

use std::time::Duration;
use thiserror::Error;

use crate::cancel::CancelCause;
use crate::config::Scenario;

/// Parameters of one simulated unit of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskParams {
    /// Wall-clock time the work takes.
    pub duration: Duration,
    /// Polling granularity for cancellation and deadline checks.
    pub tick: Duration,
    /// Stop immediately once cancellation is observed.
    pub stop_on_cancel: bool,
}

impl TaskParams {
    pub fn from_scenario(scenario: &Scenario, tick: Duration) -> Self {
        Self {
            duration: scenario.server_task_duration,
            tick,
            stop_on_cancel: scenario.stop_on_client_cancel,
        }
    }
}

/// Normal completion of the server task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCompletion {
    pub elapsed: Duration,
    /// The signal fired before completion but was overridden.
    pub cancel_observed: bool,
}

/// Errors that end the server task early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("{cause}")]
    Canceled { cause: CancelCause, elapsed: Duration },
}

impl TaskError {
    pub fn cause(&self) -> CancelCause {
        match self {
            TaskError::Canceled { cause, .. } => *cause,
        }
    }
}

/// Result type for the server task.
pub type TaskResult = Result<TaskCompletion, TaskError>;

/// Server-side outcome of one request, published after the task ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    pub request_id: String,
    pub outcome: TaskResult,
}
