//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → handed to the HTTP server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the relay has no reload path
//! - All fields have defaults so the zero-config case reproduces the
//!   out-of-the-box behavior (listen :3000, redirect to http://localhost:5000)
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, RelayConfig, TargetConfig};
pub use validation::{validate_config, ValidationError};
