//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client.rs (one GET with timeout)
//!     → TCP loopback
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → task handler (spawned server task, cancel-on-drop)
//!     → response.rs (JSON message body)
//!     → back to client.rs (status + drained body, or error)
//! ```

pub mod client;
pub mod request;
pub mod response;
pub mod server;

pub use client::{call, target_url, ClientError, ClientResponse};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::MessageBody;
pub use server::HttpServer;
