//! Severities and threshold filtering.
//!
//! Each severity carries a fixed ordinal and a five character display label. The
//! ordinal and label come from explicit lookup tables so nothing depends on the
//! declaration order of the enum.

use crate::error::LogError;
use std::fmt;
use std::str::FromStr;

/// Log level, from TRACE (most verbose) to FATAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Every severity, lowest ordinal first.
    pub const ALL: [Severity; 6] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    pub const fn ordinal(self) -> u8 {
        match self {
            Severity::Trace => 0,
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warn => 3,
            Severity::Error => 4,
            Severity::Fatal => 5,
        }
    }

    /// Fixed-width label written between the timestamp and the source.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Trace => " TRC ",
            Severity::Debug => " DBG ",
            Severity::Info => " INF ",
            Severity::Warn => " WRN ",
            Severity::Error => " ERR ",
            Severity::Fatal => " FTL ",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    /// Accepts the full name or the short label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("warning") {
            return Ok(Severity::Warn);
        }
        Severity::ALL
            .into_iter()
            .find(|sev| {
                wanted.eq_ignore_ascii_case(sev.name())
                    || wanted.eq_ignore_ascii_case(sev.label().trim())
            })
            .ok_or_else(|| LogError::UnknownSeverity(s.to_string()))
    }
}

/// Whether a message at `candidate` passes a logger configured at `threshold`.
///
/// FATAL always passes.
pub const fn is_enabled(threshold: Severity, candidate: Severity) -> bool {
    matches!(candidate, Severity::Fatal) || candidate.ordinal() >= threshold.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_strictly_increase_in_listed_order() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
        assert_eq!(Severity::Trace.ordinal(), 0);
        assert_eq!(Severity::Fatal.ordinal(), 5);
    }

    #[test]
    fn labels_share_one_width() {
        for sev in Severity::ALL {
            assert_eq!(sev.label().len(), 5, "{sev}");
            assert!(sev.label().starts_with(' ') && sev.label().ends_with(' '));
        }
    }

    #[test]
    fn threshold_gates_lower_severities() {
        for threshold in Severity::ALL {
            for candidate in Severity::ALL {
                let expected =
                    candidate == Severity::Fatal || candidate.ordinal() >= threshold.ordinal();
                assert_eq!(is_enabled(threshold, candidate), expected);
            }
        }
        assert!(!is_enabled(Severity::Info, Severity::Debug));
        assert!(is_enabled(Severity::Info, Severity::Info));
    }

    #[test]
    fn fatal_is_always_enabled() {
        for threshold in Severity::ALL {
            assert!(is_enabled(threshold, Severity::Fatal));
        }
    }

    #[test]
    fn parses_names_labels_and_alias() {
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("wrn".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("Warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!(" ftl ".parse::<Severity>().unwrap(), Severity::Fatal);
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(LogError::UnknownSeverity(s)) if s == "verbose"
        ));
    }
}
