//! IR receiver: the interrupt-side half of the pipeline
//!
//! Bundles the edge timer, capture buffer and watchdog that the edge and
//! overflow interrupts share. Both entry points are short and never block;
//! completed frames are returned to the caller, which forwards them to the
//! control loop. Decoding happens there, not here.

use super::capture::{Capture, Frame, FrameBuffer};
use super::edge_timer::EdgeTimer;
use super::watchdog::{FrameWatchdog, WatchdogOutcome};
use crate::parameters::ir::DEFAULT_FRAME_TIMEOUT;
use crate::parameters::IrParams;

/// Receiver counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiverStats {
    /// Edges captured since boot
    pub edges: u32,
    /// Complete frames handed out
    pub frames: u32,
    /// Partial frames discarded by the watchdog
    pub aborted: u32,
}

/// Edge timer + capture buffer + frame watchdog
#[derive(Debug, Clone)]
pub struct IrReceiver {
    timer: EdgeTimer,
    buffer: FrameBuffer,
    watchdog: FrameWatchdog,
    stats: ReceiverStats,
}

impl Default for IrReceiver {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_TIMEOUT)
    }
}

impl IrReceiver {
    /// Create a receiver with the given watchdog period (ticks)
    ///
    /// `const` so the firmware can place it in a static.
    pub const fn new(frame_timeout: u32) -> Self {
        Self {
            timer: EdgeTimer::new(),
            buffer: FrameBuffer::new(),
            watchdog: FrameWatchdog::new(frame_timeout),
            stats: ReceiverStats {
                edges: 0,
                frames: 0,
                aborted: 0,
            },
        }
    }

    /// Create a receiver from parameters
    pub fn from_params(params: &IrParams) -> Self {
        Self::new(params.frame_timeout)
    }

    /// Apply parameters to a running receiver
    ///
    /// Any partial frame is discarded.
    pub fn configure(&mut self, params: &IrParams) {
        self.watchdog.set_frame_timeout(params.frame_timeout);
        self.buffer.abort();
    }

    /// Edge interrupt entry point
    ///
    /// Captures the interval ending at `now`. Returns the frame when this
    /// edge was the 34th; the buffer index is already back at 0.
    #[inline]
    pub fn on_edge(&mut self, now: u64) -> Option<Frame> {
        let sample = self.timer.capture(now);
        self.watchdog.feed(now);
        self.stats.edges = self.stats.edges.wrapping_add(1);

        match self.buffer.capture(sample) {
            Capture::Complete(frame) => {
                self.stats.frames = self.stats.frames.wrapping_add(1);
                Some(frame)
            }
            Capture::Stored { .. } => None,
        }
    }

    /// Watchdog interrupt entry point
    ///
    /// Once the line has been idle for a full period the buffer index is
    /// reset unconditionally.
    pub fn on_watchdog_tick(&mut self, now: u64) -> WatchdogOutcome {
        if !self.watchdog.is_expired(now) {
            return WatchdogOutcome::Armed;
        }

        match self.buffer.abort() {
            0 => WatchdogOutcome::Idle,
            discarded => {
                self.stats.aborted = self.stats.aborted.wrapping_add(1);
                WatchdogOutcome::Aborted { discarded }
            }
        }
    }

    /// Current capture index, always in `[0, FRAME_LEN)`
    pub fn index(&self) -> usize {
        self.buffer.index()
    }

    /// Receiver counters
    pub fn stats(&self) -> ReceiverStats {
        self.stats
    }
}
