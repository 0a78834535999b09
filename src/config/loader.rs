//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::DemoConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DemoConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: DemoConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_custom_scenarios() {
        let file = write_config(
            r#"
            [listener]
            bind_address = "127.0.0.1:9090"

            [timing]
            tick_ms = 50
            startup_delay_ms = 0

            [[scenarios]]
            name = "fast"
            server_task_ms = 200
            client_timeout_ms = 100
            stop_on_client_cancel = true
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9090");
        assert_eq!(config.timing.tick_ms, 50);
        assert_eq!(config.timing.drain_grace_ms, 1_000);
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios[0].name, "fast");
        assert!(config.scenarios[0].stop_on_client_cancel);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let file = write_config(
            r#"
            [timing]
            tick_ms = 0
            "#,
        );

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert_eq!(
            err.to_string(),
            "Validation failed: timing.tick_ms must be greater than zero"
        );
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[timing\ntick_ms = 1");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
