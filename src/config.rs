//! Per-logger configuration.

use crate::clock::{Clock, SystemClock, TimestampFormat};
use crate::level::Severity;
use crate::sink::{Sink, StdoutSink};
use std::fmt;
use std::sync::Arc;

/// Everything a [`Logger`](crate::Logger) needs, fixed at construction.
///
/// Collaborators are shared behind `Arc`, so cloning a config is cheap and several
/// loggers can write to the same sink.
#[derive(Clone)]
pub struct LoggerConfig {
    pub source: String,
    pub threshold: Severity,
    pub timestamp_format: TimestampFormat,
    pub clock: Arc<dyn Clock>,
    pub sink: Arc<dyn Sink>,
    /// Append a full backtrace after the call site in error traces.
    pub capture_backtrace: bool,
}

impl LoggerConfig {
    /// INFO threshold, default timestamp format, system clock, stdout.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            threshold: Severity::Info,
            timestamp_format: TimestampFormat::default(),
            clock: Arc::new(SystemClock),
            sink: Arc::new(StdoutSink),
            capture_backtrace: false,
        }
    }

    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_backtrace(mut self, capture: bool) -> Self {
        self.capture_backtrace = capture;
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("source", &self.source)
            .field("threshold", &self.threshold)
            .field("timestamp_format", &self.timestamp_format.pattern())
            .field("capture_backtrace", &self.capture_backtrace)
            .finish_non_exhaustive()
    }
}
