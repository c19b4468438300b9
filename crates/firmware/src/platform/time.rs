//! Embassy time driver as the IR tick source

use ir_rover_core::traits::TimeSource;

/// Reads `embassy_time::Instant`
///
/// The RP2350 time driver ticks at 1 MHz, so `now_us` is also the IR
/// edge-timer tick count.
#[derive(Clone, Copy, Default)]
pub struct EmbassyTime;

impl TimeSource for EmbassyTime {
    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
