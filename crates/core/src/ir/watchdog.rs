//! Frame timeout watchdog
//!
//! Detects a stalled transmission: if no edge has arrived for
//! `frame_timeout` ticks, whatever partial frame sits in the capture buffer
//! can never complete and must be thrown away. The period is longer than any
//! legal inter-edge spacing and shorter than the gap between two
//! transmissions, so the next press always starts at index 0.
//!
//! This is the only recovery path for partial frames.

/// Result of a watchdog poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchdogOutcome {
    /// An edge arrived recently, or the period has not elapsed yet
    Armed,
    /// Period elapsed with an empty buffer; nothing to discard
    Idle,
    /// Period elapsed mid-frame; the partial frame was discarded
    Aborted {
        /// Number of samples thrown away
        discarded: usize,
    },
}

/// Idle-line detector for the capture buffer
#[derive(Debug, Clone, Copy)]
pub struct FrameWatchdog {
    frame_timeout: u32,
    last_edge: u64,
}

impl FrameWatchdog {
    /// Create a watchdog with the given period in ticks
    pub const fn new(frame_timeout: u32) -> Self {
        Self {
            frame_timeout,
            last_edge: 0,
        }
    }

    /// Record edge activity at `now`
    #[inline]
    pub fn feed(&mut self, now: u64) {
        self.last_edge = now;
    }

    /// True once the line has been idle for a full period
    ///
    /// Fires on reaching the period, like a counter overflow.
    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.last_edge) >= u64::from(self.frame_timeout)
    }

    /// Change the watchdog period
    pub fn set_frame_timeout(&mut self, frame_timeout: u32) {
        self.frame_timeout = frame_timeout;
    }
}
