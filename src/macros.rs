//! Logging macros.
//!
//! Each macro takes a logger, a template and any number of arguments. Arguments are
//! converted with [`ToArg`](crate::ToArg), so plain values work directly and
//! [`Arg::Null`](crate::Arg::Null) / [`Arg::error`](crate::Arg::error) pass through.
//! Nothing is converted when the severity is disabled. Every macro evaluates to the
//! `Result` of the underlying call.
//!
//! ```
//! use std::sync::Arc;
//! use freelog::{Arg, Logger, LoggerConfig, MemorySink, info};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(LoggerConfig::new("demo").with_sink(Arc::new(sink.clone())));
//! info!(logger, "Hello {}, you are {}", "Chris", 999).unwrap();
//! info!(logger, "value:{}", Arg::Null).unwrap();
//! assert!(sink.lines()[0].ends_with("Hello Chris, you are 999"));
//! assert!(sink.lines()[1].ends_with("value:{}"));
//! ```

#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let logger: &$crate::Logger = &$logger;
        let severity: $crate::Severity = $severity;
        if logger.is_enabled(severity) {
            logger.log(
                severity,
                ::core::option::Option::Some($template),
                &[$($crate::ToArg::to_arg(&$arg)),*],
            )
        } else {
            ::core::result::Result::<(), $crate::LogError>::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($rest)+)
    };
}
