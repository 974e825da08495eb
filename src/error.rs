//! Error type shared by every fallible operation in the crate.
//!
//! Formatting itself never fails; errors only come from configuration (bad paths,
//! bad patterns, bad level names) or from the sink refusing a write.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened for writing.
    #[error("could not open output file: {}", path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The sink failed while a line was being written.
    #[error("failed to write log line: {0}")]
    Write(#[from] io::Error),

    #[error("invalid timestamp format {0:?}")]
    InvalidTimestampFormat(String),

    #[error("unknown severity {0:?} (expected trace, debug, info, warn, error or fatal)")]
    UnknownSeverity(String),

    /// The process-wide factory was already installed or already read.
    #[error("global logger factory is already installed")]
    AlreadyInstalled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn open_sink_names_path_and_keeps_source() {
        let err = LogError::OpenSink {
            path: PathBuf::from("/no/such/dir/app.log"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "could not open output file: /no/such/dir/app.log"
        );
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("missing"));
    }

    #[test]
    fn io_errors_convert_to_write_faults() {
        let err: LogError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, LogError::Write(_)));
    }
}
