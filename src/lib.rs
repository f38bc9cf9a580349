//! HTTP Redirect Relay Library
//!
//! Answers every request on the listening port with a 302 pointing at the
//! same path-and-query on a fixed target origin.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
