//! Observability for the PRO Manizales site and tools.
//!
//! This crate provides:
//! - `LogConfig` / `init_native` / `init_browser` - `tracing` subscriber setup
//! - `LogEntry` / `LogBuilder` - Structured entries with JSON and human output

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;
