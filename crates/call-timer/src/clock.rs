use std::time::{Duration, Instant};

/// Monotonic point in time used as the start or end of a measurement.
///
/// Only meaningful relative to another `Timestamp`; subtracting two of them
/// yields the elapsed [`Duration`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    instant: Instant,
}

impl Timestamp {
    /// Capture the current monotonic time
    #[inline]
    pub fn now() -> Self {
        Self {
            instant: Instant::now(),
        }
    }

    /// Time elapsed from `earlier` to `self`.
    ///
    /// Saturates to zero if `earlier` is actually later, so a misbehaving
    /// clock can never make a measurement panic.
    #[inline]
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        self.instant.saturating_duration_since(earlier.instant)
    }

    /// Time elapsed since this timestamp was captured
    #[inline]
    pub fn elapsed(&self) -> Duration {
        Timestamp::now().duration_since(*self)
    }
}

/// Whole milliseconds in `duration`, truncating any remainder.
#[inline]
pub fn whole_millis(duration: Duration) -> u128 {
    duration.as_millis()
}
