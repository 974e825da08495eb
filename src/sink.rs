//! Output destinations.
//!
//! A sink receives the lines of one logging call (the message line followed by any
//! trace lines) and writes each one followed by `\n`. The whole group is written under
//! one lock so concurrent callers never interleave partial output.

use crate::error::LogError;
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

pub trait Sink: Send + Sync {
    fn write_lines(&self, lines: &[String]) -> io::Result<()>;

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.write_lines(&[line.to_string()])
    }
}

fn write_all_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> io::Error {
    io::Error::other("sink mutex poisoned")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        write_all_lines(&mut io::stdout().lock(), lines)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        write_all_lines(&mut io::stderr().lock(), lines)
    }
}

/// Any writer behind a mutex.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> io::Result<W> {
        self.inner.into_inner().map_err(poisoned)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        let mut guard = self.inner.lock().map_err(poisoned)?;
        write_all_lines(&mut *guard, lines)
    }
}

/// Line-buffered log file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: WriterSink<LineWriter<File>>,
}

impl FileSink {
    /// Creates or truncates `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::with_options(path.as_ref(), OpenOptions::new().write(true).create(true).truncate(true))
    }

    /// Creates `path` or appends to it.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, LogError> {
        Self::with_options(path.as_ref(), OpenOptions::new().create(true).append(true))
    }

    fn with_options(path: &Path, options: &OpenOptions) -> Result<Self, LogError> {
        let file = options.open(path).map_err(|source| LogError::OpenSink {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened log file");
        Ok(Self {
            path: path.to_path_buf(),
            writer: WriterSink::new(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        self.writer.write_lines(lines)
    }
}

/// In-memory capture. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Everything written so far, each line terminated by `\n`.
    pub fn contents(&self) -> String {
        self.guard().iter().fold(String::new(), |mut acc, l| {
            acc.push_str(l);
            acc.push('\n');
            acc
        })
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl Sink for MemorySink {
    fn write_lines(&self, lines: &[String]) -> io::Result<()> {
        self.guard().extend(lines.iter().cloned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn writer_sink_terminates_each_line() {
        let sink = WriterSink::new(Vec::new());
        sink.write_lines(&["one".to_string(), "two".to_string()]).unwrap();
        sink.write_line("three").unwrap();
        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "one\ntwo\nthree\n");
    }

    #[test]
    fn file_sink_truncates_then_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "stale\n").unwrap();

        FileSink::open(&path).unwrap().write_line("first").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n");

        let appender = FileSink::append(&path).unwrap();
        appender.write_line("second").unwrap();
        assert_eq!(appender.path(), path.as_path());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn file_sink_fails_loudly_on_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        let err = FileSink::open(&path).unwrap_err();
        assert!(matches!(err, LogError::OpenSink { path: p, .. } if p == path));
    }

    #[test]
    fn memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.write_line("hello").unwrap();
        assert_eq!(sink.lines(), vec!["hello".to_string()]);
        assert_eq!(sink.contents(), "hello\n");
        sink.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn concurrent_groups_do_not_interleave() {
        let sink = Arc::new(MemorySink::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        let group = vec![format!("head {t}/{i}"), format!("tail {t}/{i}")];
                        sink.write_lines(&group).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let lines = sink.lines();
        assert_eq!(lines.len(), 8 * 50 * 2);
        for pair in lines.chunks(2) {
            let head = pair[0].strip_prefix("head ").unwrap();
            assert_eq!(pair[1], format!("tail {head}"));
        }
    }
}
