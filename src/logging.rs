//! Diagnostics configuration and initialization.
//!
//! This module handles tracing subscriber setup for the binary's own diagnostics based on
//! CLI verbosity flags and environment variables. Diagnostics go to stderr so they never
//! mix with log lines written to stdout.

use crate::cli::LogLevel;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

pub fn max_level(level: LogLevel) -> Level {
    use LogLevel::*;
    match level {
        Error => Level::ERROR,
        Warn => Level::WARN,
        Info => Level::INFO,
        Debug => Level::DEBUG,
        Trace => Level::TRACE,
    }
}

/// Configure the tracing subscriber according to CLI verbosity flags.
///
/// Precedence:
/// 1. `RUST_LOG` directives, when set.
/// 2. Otherwise the level derived from `-q` / `-v`.
pub fn configure_logging(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(max_level(level)).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
