use std::time::Duration;

use crate::clock::Timestamp;
use crate::report::{report, ReportSink, StdoutSink};

/// Guard that reports how long its enclosing scope ran.
///
/// The start time is captured on construction. When the guard is dropped,
/// on a normal return, an early return, `?` propagation or panic unwinding,
/// the elapsed time is written to the sink exactly once. Guards in nested
/// scopes report innermost first.
///
/// ```ignore
/// fn load() {
///     let _timer = ScopeTimer::new();
///     // ...
/// } // prints "function took <N> ms"
/// ```
#[must_use = "the timer reports when dropped; bind it to a named variable such as `_timer`"]
#[derive(Debug)]
pub struct ScopeTimer<S: ReportSink = StdoutSink> {
    start: Timestamp,
    sink: S,
}

impl ScopeTimer {
    /// Start timing the current scope, reporting on standard output
    #[inline]
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }
}

impl Default for ScopeTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ReportSink> ScopeTimer<S> {
    /// Start timing the current scope, reporting to `sink`
    #[inline]
    pub fn with_sink(sink: S) -> Self {
        Self {
            start: Timestamp::now(),
            sink,
        }
    }

    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Time spent in the scope so far, without reporting it
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<S: ReportSink> Drop for ScopeTimer<S> {
    #[inline]
    fn drop(&mut self) {
        let end = Timestamp::now();
        report(&self.sink, end.duration_since(self.start));
    }
}

/// Time the rest of the enclosing block.
///
/// Expands to a hidden `ScopeTimer` binding, optionally reporting to the
/// given sink instead of standard output.
#[macro_export]
macro_rules! time_scope {
    () => {
        let _scope_timer = $crate::scope_timer::ScopeTimer::new();
    };
    ($sink:expr) => {
        let _scope_timer = $crate::scope_timer::ScopeTimer::with_sink($sink);
    };
}
