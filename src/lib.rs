//! Tiny leveled logger with `{}` placeholder substitution.
//!
//! A [`Logger`] owns an immutable [`LoggerConfig`]: a source label, a threshold
//! [`Severity`], a timestamp format, a [`Clock`] and a [`Sink`]. Each call that passes
//! the threshold produces exactly one line
//!
//! ```text
//! 2021-06-01T12:34:56.789 INF my_app::Service Hello Chris
//! ```
//!
//! followed by a trace block for every error argument left over after substitution.
//!
//! Placeholder rules:
//! * arguments fill `{}` left to right; unmatched placeholders stay literal;
//! * [`Arg::Null`] consumes its placeholder but leaves `{}` in the text;
//! * arguments beyond the last placeholder are dropped unless they are errors
//!   ([`Arg::error`]), which are rendered as traces after the line;
//! * a missing template is written as `null`.
//!
//! Calls never fail because of formatting. They return [`LogError::Write`] when the
//! sink fails, and configuration returns [`LogError`] when a file cannot be opened or a
//! level name or timestamp pattern is invalid.

pub mod arg;
pub mod clock;
pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod level;
pub mod logger;
mod macros;
pub mod sink;

pub use arg::{Arg, ErrorArg, ToArg};
pub use clock::{Clock, DEFAULT_TIMESTAMP_FORMAT, FixedClock, SystemClock, TimestampFormat};
pub use config::LoggerConfig;
pub use error::LogError;
pub use factory::{LoggerFactory, get_logger};
pub use level::{Severity, is_enabled};
pub use logger::Logger;
pub use sink::{FileSink, MemorySink, Sink, StderrSink, StdoutSink, WriterSink};
