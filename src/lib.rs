//! # Timing practice
//!
//! Demonstrates two ways of timing function calls:
//! - a scope guard that reports when the function returns
//! - a generic wrapper that times one call and passes its result through
//!
//! The timers live in the `call_timer` crate; this package adds the mock
//! workloads and configuration used by the demo binary.

pub mod config;
pub mod workloads;

pub use call_timer;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
