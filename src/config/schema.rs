//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty config file (or no file at all)
//! yields the standard setup: listen on 0.0.0.0:3000 and redirect to
//! http://localhost:5000.

use serde::{Deserialize, Serialize};

/// Root configuration for the redirect relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Redirect target: every response points here.
    pub target: TargetConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// The fixed origin all traffic is redirected to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL scheme ("http" or "https").
    pub scheme: String,

    /// Target host.
    pub host: String,

    /// Target port.
    pub port: u16,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "localhost".to_string(),
            port: 5000,
        }
    }
}

impl TargetConfig {
    /// Render the origin every Location header starts with.
    pub fn origin(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
