//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (tick > 0, durations > 0, address parses)
//! - Reject an empty scenario table
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DemoConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::DemoConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("timing.tick_ms must be greater than zero")]
    ZeroTick,

    #[error("scenario table is empty")]
    NoScenarios,

    #[error("scenario #{0} has an empty name")]
    EmptyName(usize),

    #[error("scenario #{index} has a zero {field}")]
    ZeroDuration { index: usize, field: &'static str },
}

/// Check a deserialized configuration for semantic errors.
pub fn validate_config(config: &DemoConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timing.tick_ms == 0 {
        errors.push(ValidationError::ZeroTick);
    }

    if config.scenarios.is_empty() {
        errors.push(ValidationError::NoScenarios);
    }

    for (index, scenario) in config.scenarios.iter().enumerate() {
        if scenario.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(index));
        }
        if scenario.server_task_ms == 0 {
            errors.push(ValidationError::ZeroDuration {
                index,
                field: "server_task_ms",
            });
        }
        if scenario.client_timeout_ms == 0 {
            errors.push(ValidationError::ZeroDuration {
                index,
                field: "client_timeout_ms",
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
