//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (scheme, non-empty host, parseable bind address)
//! - Detect redirect cycles (loopback target on the listening port)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("unsupported target scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("target host is empty")]
    EmptyTargetHost,

    #[error("redirect cycle: target {0} points back at the listening port")]
    RedirectCycle(String),
}

/// Check a config for semantic errors, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let listen_port = match config.listener.bind_address.parse::<SocketAddr>() {
        Ok(addr) => Some(addr.port()),
        Err(_) => {
            errors.push(ValidationError::InvalidBindAddress(
                config.listener.bind_address.clone(),
            ));
            None
        }
    };

    match config.target.scheme.as_str() {
        "http" | "https" => {}
        other => errors.push(ValidationError::UnsupportedScheme(other.to_string())),
    }

    if config.target.host.is_empty() {
        errors.push(ValidationError::EmptyTargetHost);
    }

    // A loopback target on the listening port would send clients straight
    // back to the relay.
    if let Some(port) = listen_port {
        if config.target.port == port && is_loopback_host(&config.target.host) {
            errors.push(ValidationError::RedirectCycle(config.target.origin()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_loopback_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "::1" | "[::1]" | "0.0.0.0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_redirect_cycle() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "0.0.0.0:3000".to_string();
        config.target.port = 3000;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::RedirectCycle(_))));
    }

    #[test]
    fn test_remote_target_on_same_port_is_allowed() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "0.0.0.0:3000".to_string();
        config.target.host = "example.com".to_string();
        config.target.port = 3000;

        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let mut config = RelayConfig::default();
        config.target.scheme = "ftp".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnsupportedScheme("ftp".to_string())]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RelayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.target.scheme = "gopher".to_string();
        config.target.host = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
