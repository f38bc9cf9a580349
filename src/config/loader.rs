//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
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
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RelayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/redirect-relay.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join("redirect-relay-loader-test.toml");
        fs::write(&path, "[target]\nport = 7000\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.target.port, 7000);
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let path = std::env::temp_dir().join("redirect-relay-loader-cycle.toml");
        fs::write(
            &path,
            "[listener]\nbind_address = \"0.0.0.0:3000\"\n\n[target]\nport = 3000\n",
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        fs::remove_file(&path).ok();
    }
}
