//! OS signal handling.

/// Resolve on Ctrl+C.
///
/// If the handler cannot be installed the future never resolves, so the demo
/// simply runs to completion.
pub async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Interrupt received");
}
