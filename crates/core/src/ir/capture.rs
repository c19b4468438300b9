//! Frame capture buffer
//!
//! Collects one [`EdgeSample`] per rising edge. When the 34th sample lands
//! the buffer hands out a complete [`Frame`] and rewinds its index to 0 in
//! the same call, so the index is always in `[0, FRAME_LEN)` and a frame can
//! only be handed out once.

use super::{DATA_START, FRAME_LEN};

/// Interval between two consecutive rising edges, in edge-timer ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct EdgeSample(u32);

impl EdgeSample {
    /// Wrap a raw tick count
    pub const fn from_ticks(ticks: u32) -> Self {
        Self(ticks)
    }

    /// Raw tick count
    pub const fn ticks(self) -> u32 {
        self.0
    }
}

/// A complete 34-interval transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    samples: [EdgeSample; FRAME_LEN],
}

impl Frame {
    /// Build a frame from already captured samples
    pub const fn from_samples(samples: [EdgeSample; FRAME_LEN]) -> Self {
        Self { samples }
    }

    /// All 34 intervals, including the start-bit artifacts
    pub fn samples(&self) -> &[EdgeSample; FRAME_LEN] {
        &self.samples
    }

    /// The 32 data-bit intervals, most significant bit first
    pub fn data_samples(&self) -> &[EdgeSample] {
        &self.samples[DATA_START..]
    }
}

/// Result of storing one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Sample stored; `filled` samples of the current frame are present
    Stored {
        /// Number of samples collected so far
        filled: usize,
    },
    /// Sample completed a frame; the buffer index is back at 0
    Complete(Frame),
}

/// Fixed-size rolling buffer of edge samples
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    samples: [EdgeSample; FRAME_LEN],
    index: usize,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            samples: [EdgeSample(0); FRAME_LEN],
            index: 0,
        }
    }

    /// Store `sample` at the current index
    #[inline]
    pub fn capture(&mut self, sample: EdgeSample) -> Capture {
        self.samples[self.index] = sample;
        self.index += 1;

        if self.index == FRAME_LEN {
            self.index = 0;
            Capture::Complete(Frame::from_samples(self.samples))
        } else {
            Capture::Stored { filled: self.index }
        }
    }

    /// Discard the partial frame and rewind to index 0
    ///
    /// Returns the number of samples discarded.
    pub fn abort(&mut self) -> usize {
        let discarded = self.index;
        self.index = 0;
        discarded
    }

    /// Position the next sample will be written to
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when no partial frame is pending
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ticks: u32) -> EdgeSample {
        EdgeSample::from_ticks(ticks)
    }

    #[test]
    fn index_advances_per_capture() {
        let mut buffer = FrameBuffer::new();
        assert!(buffer.is_empty());

        assert_eq!(buffer.capture(sample(9_000)), Capture::Stored { filled: 1 });
        assert_eq!(buffer.capture(sample(5_060)), Capture::Stored { filled: 2 });
        assert_eq!(buffer.index(), 2);
    }

    #[test]
    fn thirty_fourth_sample_completes_and_rewinds() {
        let mut buffer = FrameBuffer::new();
        for i in 0..(FRAME_LEN - 1) {
            let outcome = buffer.capture(sample(i as u32));
            assert!(matches!(outcome, Capture::Stored { .. }));
            assert!(buffer.index() < FRAME_LEN);
        }

        let Capture::Complete(frame) = buffer.capture(sample(33)) else {
            panic!("34th sample must complete the frame");
        };
        assert_eq!(buffer.index(), 0);
        assert_eq!(frame.samples()[0], sample(0));
        assert_eq!(frame.samples()[33], sample(33));
        assert_eq!(frame.data_samples().len(), 32);
        assert_eq!(frame.data_samples()[0], sample(2));
    }

    #[test]
    fn next_frame_starts_clean_after_completion() {
        let mut buffer = FrameBuffer::new();
        for _ in 0..FRAME_LEN {
            buffer.capture(sample(1_125));
        }
        assert_eq!(buffer.capture(sample(42)), Capture::Stored { filled: 1 });
    }

    #[test]
    fn abort_reports_discarded_samples() {
        let mut buffer = FrameBuffer::new();
        for _ in 0..33 {
            buffer.capture(sample(1_125));
        }
        assert_eq!(buffer.abort(), 33);
        assert_eq!(buffer.index(), 0);
        assert_eq!(buffer.abort(), 0);
    }
}
