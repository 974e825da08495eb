//! The logger: level gate, line formatting and sink write for one call.

use crate::arg::Arg;
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::format::{format_line, render_traces};
use crate::level::{self, Severity};
use std::panic::Location;

/// A configured logger. Immutable once built; share it freely between threads.
#[derive(Debug, Clone)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn source(&self) -> &str {
        &self.config.source
    }

    pub fn threshold(&self) -> Severity {
        self.config.threshold
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        level::is_enabled(self.config.threshold, severity)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Severity::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Severity::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Severity::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Severity::Error)
    }

    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(Severity::Fatal)
    }

    /// Formats and writes one line, plus a trace block for each error argument left
    /// over after substitution.
    ///
    /// Returns immediately, without reading the clock or rendering anything, when
    /// `severity` is below the threshold. A `None` template is written as `null`.
    #[track_caller]
    pub fn log(
        &self,
        severity: Severity,
        template: Option<&str>,
        args: &[Arg<'_>],
    ) -> Result<(), LogError> {
        if !self.is_enabled(severity) {
            return Ok(());
        }
        let call_site = Location::caller();

        let timestamp = self
            .config
            .timestamp_format
            .format(self.config.clock.now());
        let line = format_line(
            severity,
            &self.config.source,
            &timestamp,
            template,
            args,
        );

        let traces = render_traces(
            &args[line.consumed..],
            call_site,
            self.config.capture_backtrace,
        );
        let mut lines = Vec::with_capacity(1 + traces.len());
        lines.push(line.text);
        for block in &traces {
            lines.extend(block.lines().map(str::to_string));
        }

        self.config.sink.write_lines(&lines)?;
        Ok(())
    }

    #[track_caller]
    pub fn trace(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Trace, Some(template), args)
    }

    #[track_caller]
    pub fn debug(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Debug, Some(template), args)
    }

    #[track_caller]
    pub fn info(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Info, Some(template), args)
    }

    #[track_caller]
    pub fn warn(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Warn, Some(template), args)
    }

    #[track_caller]
    pub fn error(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Error, Some(template), args)
    }

    #[track_caller]
    pub fn fatal(&self, template: &str, args: &[Arg<'_>]) -> Result<(), LogError> {
        self.log(Severity::Fatal, Some(template), args)
    }
}
