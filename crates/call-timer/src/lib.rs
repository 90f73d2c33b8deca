//! # call-timer: wall-clock timing for scopes and calls
//!
//! Two independent ways to measure how long something takes:
//! - [`ScopeTimer`], a guard that reports when the enclosing scope exits
//! - [`timeit`] and friends, which time one call and return its result
//!
//! Both write a single `function took <N> ms` line per measurement.

pub mod clock;
pub mod report;
pub mod scope_timer;
pub mod timeit;

pub use clock::{whole_millis, Timestamp};
pub use report::{format_report, parse_report, MemorySink, ReportSink, StdoutSink};
pub use scope_timer::ScopeTimer;
pub use timeit::{
    timeit, timeit_future, timeit_future_to, timeit_to, timeit_with, timeit_with_to, try_timeit,
    try_timeit_to, try_timeit_with, try_timeit_with_to, Invoke,
};
