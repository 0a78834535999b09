//! One-shot HTTP client.
//!
//! # Responsibilities
//! - Issue exactly one GET bound to a timeout
//! - Drain the response body
//! - Report build, transport, deadline and read failures distinctly
//!
//! # Design Decisions
//! - No retries: every failure is terminal for the call
//! - The timeout is measured from just before the request is sent

use reqwest::StatusCode;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Errors from a single client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be built.
    #[error("client build error: {0}")]
    Build(#[source] reqwest::Error),

    /// The request itself could not be constructed.
    #[error("request build error: {0}")]
    Request(#[source] reqwest::Error),

    /// The local deadline elapsed before a response arrived.
    #[error("request failed: deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("response read error: {0}")]
    Read(#[source] reqwest::Error),
}

/// A fully drained response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResponse {
    pub status: StatusCode,
    pub body: String,
}

/// URL for reaching a server bound to `addr`.
///
/// An unspecified bind address (`0.0.0.0`, `::`) is reached over loopback.
pub fn target_url(addr: SocketAddr) -> String {
    let ip = match addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}/", SocketAddr::new(ip, addr.port()))
}

/// Fire one GET at `url`, giving up after `timeout`.
pub async fn call(url: &str, timeout: Duration) -> Result<ClientResponse, ClientError> {
    let client = reqwest::Client::builder()
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .map_err(ClientError::Build)?;

    let request = client
        .get(url)
        .timeout(timeout)
        .build()
        .map_err(ClientError::Request)?;

    tracing::debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "client request");

    let response = client.execute(request).await.map_err(|e| {
        if e.is_timeout() {
            ClientError::DeadlineExceeded(timeout)
        } else {
            ClientError::Transport(e)
        }
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            ClientError::DeadlineExceeded(timeout)
        } else {
            ClientError::Read(e)
        }
    })?;

    Ok(ClientResponse { status, body })
}
