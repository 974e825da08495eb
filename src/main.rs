//! Command line front end for the freelog logger.
//!
//! Emits a single log line built from a template and positional arguments, using the same
//! formatting, threshold and sink rules as the library:
//! 1. Parse CLI flags and set up diagnostics on stderr.
//! 2. Load defaults from `FREELOG_LEVEL`, `FREELOG_FILE` and `FREELOG_TIMESTAMP_FORMAT`.
//! 3. Apply flag overrides and build a logger for `--source`.
//! 4. Write the line at `--severity`; below-threshold severities write nothing.
//!
//! Failing to open the output file or to write the line exits with a non‑zero status.

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use freelog::{LoggerFactory, Severity};
use std::path::PathBuf;
use tracing::{debug, info};

use cli::{OutputConfig, build_factory, message_args, verbosity_to_log_level};

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(
    version,
    about = concat!(
        env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"),
        " - Write one leveled log line with {} placeholder substitution.",
    )
)]
struct Cli {
    /// Message template; each `{}` is replaced by the next argument.
    template: String,
    /// Substitution arguments. The exact word `null` leaves its placeholder as `{}`.
    args: Vec<String>,
    /// Severity of the emitted line.
    #[arg(short = 's', long = "severity", default_value = "info")]
    severity: Severity,
    /// Minimum severity written (defaults to FREELOG_LEVEL, then info).
    #[arg(short = 'l', long = "level")]
    level: Option<Severity>,
    /// Source label printed after the severity.
    #[arg(long = "source", default_value = env!("CARGO_PKG_NAME"))]
    source: String,
    /// Write to this file instead of stdout (truncated unless --append).
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,
    /// Append to --file instead of truncating it.
    #[arg(long = "append", requires = "file")]
    append: bool,
    /// chrono strftime pattern for the timestamp.
    #[arg(long = "timestamp-format")]
    timestamp_format: Option<String>,
    /// Include a full backtrace in error traces.
    #[arg(long = "backtrace")]
    backtrace: bool,
    /// Increase diagnostics verbosity (-v=info, -vv=debug, -vvv=trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Quiet mode: only diagnostics errors. Overrides -v.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Cli {
    fn output_config(&self) -> OutputConfig {
        OutputConfig {
            threshold: self.level,
            file: self.file.clone(),
            append: self.append,
            timestamp_format: self.timestamp_format.clone(),
            backtrace: self.backtrace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::configure_logging(verbosity_to_log_level(cli.verbose, cli.quiet));

    debug!(version = env!("CARGO_PKG_VERSION"), ?cli, "starting freelog");

    let base = LoggerFactory::from_env().context("invalid FREELOG_* environment")?;
    let factory =
        build_factory(base, &cli.output_config()).context("invalid output configuration")?;
    let logger = factory.get_logger(cli.source.as_str());

    if !logger.is_enabled(cli.severity) {
        info!(
            severity = %cli.severity,
            threshold = %logger.threshold(),
            "below threshold; nothing written"
        );
        return Ok(());
    }

    let args = message_args(&cli.args);
    logger
        .log(cli.severity, Some(&cli.template), &args)
        .context("failed to write log line")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_severities_and_positionals() {
        let cli = Cli::try_parse_from([
            "freelog", "-s", "warn", "--level", "DBG", "Hello {} {}", "Chris", "null",
        ])
        .unwrap();
        assert_eq!(cli.severity, Severity::Warn);
        assert_eq!(cli.level, Some(Severity::Debug));
        assert_eq!(cli.template, "Hello {} {}");
        assert_eq!(cli.args, vec!["Chris", "null"]);
        assert_eq!(cli.source, "freelog");
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Cli::try_parse_from(["freelog", "-s", "loud", "msg"]).is_err());
    }

    #[test]
    fn append_requires_file() {
        assert!(Cli::try_parse_from(["freelog", "--append", "msg"]).is_err());
    }
}
