//! Process defaults for new loggers.
//!
//! A [`LoggerFactory`] is an ordinary value: build one, hand it around, call
//! [`LoggerFactory::get_logger`]. For code that wants a process-wide default there is a
//! single global slot which can be written once with [`LoggerFactory::install`] and read
//! many times with [`LoggerFactory::global`]. Reading it before anything was installed
//! fixes the default (INFO, stdout) for the rest of the process.

use crate::clock::{Clock, SystemClock, TimestampFormat};
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::level::Severity;
use crate::logger::Logger;
use crate::sink::{FileSink, Sink, StdoutSink};
use once_cell::sync::OnceCell;
use std::any::type_name;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

pub const ENV_LEVEL: &str = "FREELOG_LEVEL";
pub const ENV_FILE: &str = "FREELOG_FILE";
pub const ENV_TIMESTAMP_FORMAT: &str = "FREELOG_TIMESTAMP_FORMAT";

static GLOBAL: OnceCell<LoggerFactory> = OnceCell::new();

#[derive(Clone)]
pub struct LoggerFactory {
    threshold: Severity,
    timestamp_format: TimestampFormat,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn Sink>,
    capture_backtrace: bool,
}

impl Default for LoggerFactory {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            timestamp_format: TimestampFormat::default(),
            clock: Arc::new(SystemClock),
            sink: Arc::new(StdoutSink),
            capture_backtrace: false,
        }
    }
}

impl LoggerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `FREELOG_LEVEL`, `FREELOG_FILE` (truncated on open) and
    /// `FREELOG_TIMESTAMP_FORMAT`. Unset or empty variables are ignored.
    pub fn from_env() -> Result<Self, LogError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LogError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut factory = Self::default();
        if let Some(level) = get(ENV_LEVEL) {
            factory = factory.with_threshold(level.parse()?);
        }
        if let Some(pattern) = get(ENV_TIMESTAMP_FORMAT) {
            factory = factory.with_timestamp_format(TimestampFormat::new(pattern)?);
        }
        if let Some(path) = get(ENV_FILE) {
            factory = factory.with_log_file(path)?;
        }
        Ok(factory)
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

    /// Routes output to `path`, creating or truncating it.
    ///
    /// Fails with [`LogError::OpenSink`] if the file cannot be opened for writing.
    pub fn with_log_file(self, path: impl AsRef<Path>) -> Result<Self, LogError> {
        let sink = FileSink::open(path)?;
        Ok(self.with_sink(Arc::new(sink)))
    }

    pub fn with_backtrace(mut self, capture: bool) -> Self {
        self.capture_backtrace = capture;
        self
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn config_for(&self, source: impl Into<String>) -> LoggerConfig {
        LoggerConfig::new(source)
            .with_threshold(self.threshold)
            .with_timestamp_format(self.timestamp_format.clone())
            .with_clock(Arc::clone(&self.clock))
            .with_sink(Arc::clone(&self.sink))
            .with_backtrace(self.capture_backtrace)
    }

    pub fn get_logger(&self, source: impl Into<String>) -> Logger {
        Logger::new(self.config_for(source))
    }

    /// Logger labelled with the fully qualified name of `T`.
    pub fn logger_for<T: ?Sized>(&self) -> Logger {
        self.get_logger(type_name::<T>())
    }

    /// Makes this factory the process-wide default.
    ///
    /// Succeeds at most once, and only if [`LoggerFactory::global`] has not been read yet.
    pub fn install(self) -> Result<(), LogError> {
        let threshold = self.threshold;
        GLOBAL.set(self).map_err(|_| {
            warn!("global logger factory already installed; keeping the existing one");
            LogError::AlreadyInstalled
        })?;
        debug!(%threshold, "installed global logger factory");
        Ok(())
    }

    pub fn global() -> &'static LoggerFactory {
        GLOBAL.get_or_init(LoggerFactory::default)
    }
}

/// Logger for `T` built from the global factory.
pub fn get_logger<T: ?Sized>() -> Logger {
    LoggerFactory::global().logger_for::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::sink::MemorySink;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    struct PaymentService;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn loggers_inherit_factory_settings() {
        let sink = MemorySink::new();
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2022, 1, 2)
                .unwrap()
                .and_hms_milli_opt(3, 4, 5, 6)
                .unwrap(),
        );
        let factory = LoggerFactory::new()
            .with_threshold(Severity::Debug)
            .with_clock(Arc::new(clock))
            .with_sink(Arc::new(sink.clone()));

        let logger = factory.logger_for::<PaymentService>();
        assert_eq!(logger.threshold(), Severity::Debug);
        assert_eq!(logger.source(), "freelog::factory::tests::PaymentService");

        logger.debug("ready", &[]).unwrap();
        assert_eq!(
            sink.lines(),
            vec!["2022-01-02T03:04:05.006 DBG freelog::factory::tests::PaymentService ready"]
        );
    }

    #[test]
    fn log_file_via_factory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let factory = LoggerFactory::new().with_log_file(file.path()).unwrap();
        let logger = factory.get_logger("factory");
        logger
            .info(
                "Name:{} Age:{} Location:{}",
                &[
                    crate::Arg::value(&"Chris Newland"),
                    crate::Arg::value(&999),
                    crate::Arg::value(&"QueingForCompilation"),
                ],
            )
            .unwrap();
        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.ends_with("Name:Chris Newland Age:999 Location:QueingForCompilation\n"));
    }

    #[test]
    fn unopenable_log_file_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let result = LoggerFactory::new().with_log_file(dir.path().join("nope").join("x.log"));
        assert!(matches!(result, Err(LogError::OpenSink { .. })));
    }

    #[test]
    fn environment_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.log");
        let path_str = path.to_str().unwrap();
        let factory = LoggerFactory::from_lookup(lookup(&[
            (ENV_LEVEL, "warn"),
            (ENV_TIMESTAMP_FORMAT, "%H:%M"),
            (ENV_FILE, path_str),
        ]))
        .unwrap();
        assert_eq!(factory.threshold(), Severity::Warn);
        assert_eq!(factory.timestamp_format().pattern(), "%H:%M");

        factory.get_logger("env").warn("to file", &[]).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().ends_with(" WRN env to file\n"));
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let factory = LoggerFactory::from_lookup(lookup(&[(ENV_LEVEL, "  ")])).unwrap();
        assert_eq!(factory.threshold(), Severity::Info);
        assert_eq!(factory.timestamp_format(), &TimestampFormat::default());
    }

    #[test]
    fn bad_environment_values_are_errors() {
        assert!(matches!(
            LoggerFactory::from_lookup(lookup(&[(ENV_LEVEL, "loud")])),
            Err(LogError::UnknownSeverity(_))
        ));
        assert!(matches!(
            LoggerFactory::from_lookup(lookup(&[(ENV_TIMESTAMP_FORMAT, "%Q")])),
            Err(LogError::InvalidTimestampFormat(_))
        ));
        assert!(matches!(
            LoggerFactory::from_lookup(lookup(&[(
                ENV_TIMESTAMP_FORMAT,
                "%Y-%m-%dT%H:%M:%S%.3f%:z"
            )])),
            Err(LogError::InvalidTimestampFormat(_))
        ));
    }

    #[test]
    fn global_is_set_once() {
        // Both orders end with a fixed global and a rejected second install.
        let _ = LoggerFactory::new().with_threshold(Severity::Error).install();
        let first = LoggerFactory::global().threshold();
        assert!(matches!(
            LoggerFactory::new().with_threshold(Severity::Trace).install(),
            Err(LogError::AlreadyInstalled)
        ));
        assert_eq!(LoggerFactory::global().threshold(), first);
        assert_eq!(get_logger::<PaymentService>().threshold(), first);
    }
}
