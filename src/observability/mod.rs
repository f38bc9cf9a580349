//! Observability subsystem.
//!
//! One concern only: structured logging to stdout. The relay emits a startup
//! banner, one line per redirect, and shutdown notices.

pub mod logging;
