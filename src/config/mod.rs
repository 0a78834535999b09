//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DemoConfig (validated, immutable)
//!     → scenario.rs (ScenarioTable, select by index)
//!     → Scenario passed by value to server and client
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; the defaults carry the shipped scenario table
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod scenario;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use scenario::{Scenario, ScenarioError, ScenarioTable};
pub use schema::{DemoConfig, ListenerConfig, ScenarioConfig, TimingConfig};
pub use validation::{validate_config, ValidationError};
