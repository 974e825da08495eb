//! Line formatting.
//!
//! A log line is `<timestamp><label><source> <message>`. The message is produced by
//! substituting arguments into `{}` placeholders left to right. Argument handling is two
//! passes over the slice:
//!
//! 1. [`format_line`] consumes `min(placeholders, args)` arguments for substitution and
//!    reports how many it used.
//! 2. [`render_traces`] receives whatever was not consumed and renders a trace block for
//!    every error among them. Everything else left over is dropped.
//!
//! Both functions are pure: the same inputs always give the same text.

use crate::arg::{Arg, ErrorArg};
use crate::level::Severity;
use std::backtrace::Backtrace;
use std::fmt::{self, Write};
use std::panic::Location;

pub const PLACEHOLDER: &str = "{}";

/// Rendering of an absent template.
pub const NULL_TEMPLATE: &str = "null";

/// Result of pass one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    pub text: String,
    /// Number of leading arguments used by placeholders.
    pub consumed: usize,
}

pub fn format_line(
    severity: Severity,
    source: &str,
    timestamp: &str,
    template: Option<&str>,
    args: &[Arg<'_>],
) -> FormattedLine {
    let mut text = String::with_capacity(
        timestamp.len() + severity.label().len() + source.len() + 1 + template.map_or(4, str::len),
    );
    text.push_str(timestamp);
    text.push_str(severity.label());
    text.push_str(source);
    text.push(' ');

    let Some(template) = template else {
        text.push_str(NULL_TEMPLATE);
        return FormattedLine { text, consumed: 0 };
    };

    let consumed = substitute(&mut text, template, args);
    FormattedLine { text, consumed }
}

/// Appends `template` to `out` with placeholders replaced, returning the number of
/// arguments consumed.
fn substitute(out: &mut String, template: &str, args: &[Arg<'_>]) -> usize {
    let mut rest = template;
    let mut consumed = 0;
    while consumed < args.len() {
        let Some(pos) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..pos]);
        match &args[consumed] {
            Arg::Null => out.push_str(PLACEHOLDER),
            Arg::Value(v) => push_display(out, v),
            Arg::Error(e) => push_display(out, &e.error()),
        }
        consumed += 1;
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    out.push_str(rest);
    consumed
}

/// Appends `value`, or a literal `{}` if its `Display` impl returns an error.
fn push_display(out: &mut String, value: &dyn fmt::Display) {
    let start = out.len();
    if write!(out, "{value}").is_err() {
        out.truncate(start);
        out.push_str(PLACEHOLDER);
    }
}

/// Renders one trace block per error in `trailing`, in order.
///
/// Each block is multi-line: `<type>: <message>`, a `Caused by:` line per source in the
/// chain, then frame lines (`\tat ...`). The call site is always the first frame; a
/// forced backtrace follows when `capture_backtrace` is set.
pub fn render_traces(
    trailing: &[Arg<'_>],
    call_site: &Location<'_>,
    capture_backtrace: bool,
) -> Vec<String> {
    let errors: Vec<&ErrorArg<'_>> = trailing.iter().filter_map(Arg::as_error).collect();
    if errors.is_empty() {
        return Vec::new();
    }

    let frames = if capture_backtrace {
        backtrace_frames(&Backtrace::force_capture())
    } else {
        Vec::new()
    };

    errors
        .into_iter()
        .map(|e| render_trace(e, call_site, &frames))
        .collect()
}

fn render_trace(error: &ErrorArg<'_>, call_site: &Location<'_>, frames: &[String]) -> String {
    let mut block = format!("{}: ", error.type_name());
    push_display(&mut block, &error.error());
    let mut cause = error.error().source();
    while let Some(c) = cause {
        block.push_str("\nCaused by: ");
        push_display(&mut block, &c);
        cause = c.source();
    }
    let _ = write!(
        block,
        "\n\tat {}:{}:{}",
        call_site.file(),
        call_site.line(),
        call_site.column()
    );
    for frame in frames {
        block.push_str("\n\t");
        block.push_str(frame);
    }
    block
}

fn backtrace_frames(bt: &Backtrace) -> Vec<String> {
    bt.to_string()
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
