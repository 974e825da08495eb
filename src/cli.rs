//! CLI argument processing and conversion utilities.
//!
//! This module turns parsed flags into the library's types: the diagnostics verbosity,
//! a configured `LoggerFactory`, and the message arguments.

use freelog::{Arg, LogError, LoggerFactory, Severity, TimestampFormat};
use std::path::PathBuf;
use std::sync::Arc;

/// Verbosity of the binary's own diagnostics (not of the lines it emits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Map `-q` / `-v` occurrences to a diagnostics level.
///
/// `quiet` wins over any number of `-v`. Without flags only warnings are shown.
pub fn verbosity_to_log_level(verbose: u8, quiet: bool) -> LogLevel {
    match (quiet, verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, 2) => LogLevel::Debug,
        (false, _) => LogLevel::Trace,
    }
}

/// Output flags distilled from the command line. `None` keeps the environment value.
#[derive(Debug, Default, Clone)]
pub struct OutputConfig {
    pub threshold: Option<Severity>,
    pub file: Option<PathBuf>,
    pub append: bool,
    pub timestamp_format: Option<String>,
    pub backtrace: bool,
}

/// Layer CLI overrides on top of `base` (normally `LoggerFactory::from_env()`).
pub fn build_factory(base: LoggerFactory, opts: &OutputConfig) -> Result<LoggerFactory, LogError> {
    let mut factory = base;
    if let Some(threshold) = opts.threshold {
        factory = factory.with_threshold(threshold);
    }
    if let Some(pattern) = &opts.timestamp_format {
        factory = factory.with_timestamp_format(TimestampFormat::new(pattern.as_str())?);
    }
    if let Some(path) = &opts.file {
        factory = if opts.append {
            factory.with_sink(Arc::new(freelog::FileSink::append(path)?))
        } else {
            factory.with_log_file(path)?
        };
    }
    if opts.backtrace {
        factory = factory.with_backtrace(true);
    }
    Ok(factory)
}

/// Positional message arguments. The exact word `null` stands for an absent value.
pub fn message_args(raw: &[String]) -> Vec<Arg<'_>> {
    raw.iter()
        .map(|a| if a == "null" { Arg::Null } else { Arg::value(a) })
        .collect()
}
