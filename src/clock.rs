//! Time source and timestamp rendering.

use crate::error::LogError;
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};
use std::fmt::Write;

/// `yyyy-MM-ddTHH:mm:ss.SSS` in local time.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant. Useful for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// A validated strftime pattern.
///
/// Validation happens once in [`TimestampFormat::new`], so [`TimestampFormat::format`]
/// cannot fail. Specifiers that need a UTC offset (`%z`, `%:z`, `%Z`, `%+`) are rejected
/// there because instants are local wall-clock times without one. The value is immutable
/// and can be shared between threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampFormat {
    pattern: String,
}

impl TimestampFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self, LogError> {
        let pattern = pattern.into();
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LogError::InvalidTimestampFormat(pattern));
        }
        // Rendering errors depend only on the items, never on the instant.
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDateTime::default().format(&pattern)).is_err() {
            return Err(LogError::InvalidTimestampFormat(pattern));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, instant: NaiveDateTime) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", instant.format(&self.pattern));
        out
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}
