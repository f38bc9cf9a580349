//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown:
//!     Ctrl+C or Shutdown::trigger → stop accepting → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind error at startup is fatal
//! - No drain phase; a response is a single small write

pub mod shutdown;

pub use shutdown::Shutdown;
