//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the task handler on `GET /`
//! - Wire up middleware (tracing, request ID)
//! - Run each request's task detached from the request future
//! - Publish server-side outcomes on the report channel
//! - Bind server to listener and shut down on signal

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Instrument;

use crate::cancel::CancelSignal;
use crate::http::request::{self, UuidRequestId};
use crate::http::response::{self, MessageBody};
use crate::task::{run_task, TaskParams, TaskReport};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub params: TaskParams,
    pub reports: mpsc::UnboundedSender<TaskReport>,
}

/// HTTP server hosting the simulated task.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server running tasks with `params`.
    pub fn new(params: TaskParams, reports: mpsc::UnboundedSender<TaskReport>) -> Self {
        let state = AppState { params, reports };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(task_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The configured router, for in-process use.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Runs the task for one request.
///
/// The task is spawned so that a dropped request future (client disconnect)
/// only fires the signal through the guard; whether the work stops is up to
/// the task's `stop_on_cancel`.
async fn task_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<MessageBody>) {
    let request_id = request::request_id(&headers);
    tracing::info!(request_id = %request_id, "server task start");

    let signal = CancelSignal::new();
    let guard = signal.drop_guard();
    let params = state.params;
    let reports = state.reports.clone();
    let span = tracing::info_span!("server_task", request_id = %request_id);
    let task_request_id = request_id.clone();

    let handle = tokio::spawn(
        async move {
            let outcome = run_task(&params, &signal).await;
            if reports
                .send(TaskReport {
                    request_id: task_request_id,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!("report receiver dropped");
            }
            outcome
        }
        .instrument(span),
    );

    let joined = handle.await;
    guard.disarm();

    match joined {
        Ok(Ok(_)) => response::success(),
        Ok(Err(e)) => {
            tracing::warn!(request_id = %request_id, error = %e, "server task failed");
            response::failure(e.to_string())
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "server task panicked");
            response::failure(e.to_string())
        }
    }
}
