//! Report line formatting and the sinks that receive it.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::clock::whole_millis;

const REPORT_PREFIX: &str = "function took ";
const REPORT_SUFFIX: &str = " ms";

/// Line-oriented destination for elapsed-time reports.
///
/// Reports may be written from `Drop` while a panic is unwinding, so
/// implementations must return errors instead of panicking.
pub trait ReportSink {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl<S: ReportSink + ?Sized> ReportSink for &S {
    #[inline]
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Arc<S> {
    #[inline]
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Writes each report as one line on standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory sink that keeps every line it receives.
///
/// Clones share the same buffer, so a clone can be handed to a timer while
/// another handle is kept around to inspect what was reported.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines received so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Millisecond values of every well-formed report received so far
    pub fn reported_millis(&self) -> Vec<u128> {
        self.lines
            .lock()
            .iter()
            .filter_map(|line| parse_report(line))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl ReportSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_owned());
        Ok(())
    }
}

/// Render a report line: `function took <N> ms`, N in whole milliseconds.
#[inline]
pub fn format_report(elapsed: Duration) -> String {
    format!("{REPORT_PREFIX}{}{REPORT_SUFFIX}", whole_millis(elapsed))
}

/// Extract the millisecond count from a line produced by [`format_report`].
pub fn parse_report(line: &str) -> Option<u128> {
    line.strip_prefix(REPORT_PREFIX)?
        .strip_suffix(REPORT_SUFFIX)?
        .parse()
        .ok()
}

/// Emit one report for `elapsed` to `sink`.
///
/// A failed write is logged and otherwise ignored.
pub fn report<S: ReportSink + ?Sized>(sink: &S, elapsed: Duration) {
    debug!(
        elapsed_ms = whole_millis(elapsed) as u64,
        elapsed_ns = elapsed.as_nanos() as u64,
        "timed section finished"
    );

    if let Err(err) = sink.write_line(&format_report(elapsed)) {
        warn!(error = %err, "failed to write timing report");
    }
}
