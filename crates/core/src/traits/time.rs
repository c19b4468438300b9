//! Tick source for edge timestamps and watchdog checks
//!
//! The edge timer and the frame watchdog only need a monotonic tick count.
//! On the RP2350 the system timer runs at 1 MHz, so one tick is one
//! microsecond and [`TimeSource::now_us`] is the tick counter.

use core::cell::Cell;

/// Monotonic microsecond clock
///
/// `EmbassyTime` in the firmware crate reads the Embassy time driver;
/// [`MockTime`] lets tests place edges at exact instants.
///
/// ```
/// use ir_rover_core::traits::{MockTime, TimeSource};
///
/// let clock = MockTime::new();
/// let leader = clock.now_us();
/// clock.advance(2_250); // one logical "1"
/// assert_eq!(clock.elapsed_since(leader), 2_250);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Microseconds since boot
    fn now_us(&self) -> u64;

    /// Microseconds since `earlier`, zero if `earlier` is in the future
    fn elapsed_since(&self, earlier: u64) -> u64 {
        self.now_us().saturating_sub(earlier)
    }
}

/// Hand-driven clock for host tests
#[derive(Debug, Clone, Default)]
pub struct MockTime {
    ticks: Cell<u64>,
}

// Host tests drive the clock from a single thread.
unsafe impl Send for MockTime {}
unsafe impl Sync for MockTime {}

impl MockTime {
    pub fn new() -> Self {
        Self::with_initial(0)
    }

    /// Clock that reads `us` until moved
    pub fn with_initial(us: u64) -> Self {
        Self {
            ticks: Cell::new(us),
        }
    }

    /// Jump to an absolute instant
    pub fn set(&self, us: u64) {
        self.ticks.set(us);
    }

    /// Move forward by `us`
    pub fn advance(&self, us: u64) {
        self.ticks.set(self.ticks.get().saturating_add(us));
    }
}

impl TimeSource for MockTime {
    fn now_us(&self) -> u64 {
        self.ticks.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_instant_is_kept() {
        assert_eq!(MockTime::new().now_us(), 0);
        assert_eq!(MockTime::with_initial(13_500).now_us(), 13_500);
    }

    #[test]
    fn bit_periods_accumulate() {
        let clock = MockTime::new();
        clock.advance(1_125);
        clock.advance(2_250);
        assert_eq!(clock.now_us(), 3_375);

        clock.set(100);
        assert_eq!(clock.now_us(), 100);
    }

    #[test]
    fn elapsed_saturates_for_future_reference() {
        let clock = MockTime::with_initial(1_000);
        assert_eq!(clock.elapsed_since(400), 600);
        assert_eq!(clock.elapsed_since(5_000), 0);
    }
}
