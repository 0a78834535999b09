//! Response bodies.
//!
//! # Responsibilities
//! - Define the JSON body shared by server and client
//! - Map task outcomes to status codes
//!
//! # Design Decisions
//! - Success is `200 {"message":"success"}`
//! - Any task error is `500` with the error text as message

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "success";

/// JSON body `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn success() -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message: SUCCESS_MESSAGE.to_string(),
        }),
    )
}

pub fn failure(message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}
