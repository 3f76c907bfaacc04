//! Observability for the catalog viewer.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Logging vocabulary shared by config and CLI
//! - `LoggingConfig` - Level, format and extra filter directives
//! - `init_logging` - Installs the global `tracing` subscriber

mod logging;

pub use logging::*;
