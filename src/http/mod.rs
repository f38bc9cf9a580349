//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → redirect.rs (build Location, emit 302)
//!     → Send to client
//! ```

pub mod redirect;
pub mod server;

pub use server::HttpServer;
