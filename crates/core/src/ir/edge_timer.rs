//! Edge timer
//!
//! Turns absolute edge timestamps into relative intervals: each capture
//! returns the ticks elapsed since the previous capture and restarts the
//! count, the way an input-capture unit with a cleared counter behaves.
//! Runs in the edge interrupt context, so it does nothing but subtract and
//! store.

use super::capture::EdgeSample;

/// Free-running interval counter restarted on every edge
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTimer {
    last_edge: u64,
}

impl EdgeTimer {
    /// Create a timer whose count starts at time zero
    pub const fn new() -> Self {
        Self { last_edge: 0 }
    }

    /// Capture the interval ending at `now` and restart the count
    ///
    /// Intervals longer than `u32::MAX` ticks saturate; they only occur for
    /// the leader interval, which is never decoded.
    #[inline]
    pub fn capture(&mut self, now: u64) -> EdgeSample {
        let elapsed = now.saturating_sub(self.last_edge);
        self.last_edge = now;
        EdgeSample::from_ticks(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Restart the count at `now` without producing a sample
    pub fn reset(&mut self, now: u64) {
        self.last_edge = now;
    }

    /// Timestamp of the most recent capture or reset
    pub fn last_edge(&self) -> u64 {
        self.last_edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_relative_intervals() {
        let mut timer = EdgeTimer::new();
        timer.reset(10_000);

        assert_eq!(timer.capture(11_125).ticks(), 1_125);
        assert_eq!(timer.capture(13_375).ticks(), 2_250);
        assert_eq!(timer.last_edge(), 13_375);
    }

    #[test]
    fn first_capture_counts_from_start() {
        let mut timer = EdgeTimer::new();
        assert_eq!(timer.capture(4_000).ticks(), 4_000);
    }

    #[test]
    fn long_idle_saturates() {
        let mut timer = EdgeTimer::new();
        let sample = timer.capture(u64::from(u32::MAX) + 10);
        assert_eq!(sample.ticks(), u32::MAX);
    }

    #[test]
    fn time_going_backwards_yields_zero() {
        let mut timer = EdgeTimer::new();
        timer.reset(5_000);
        assert_eq!(timer.capture(4_000).ticks(), 0);
    }
}
