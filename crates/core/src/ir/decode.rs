//! Bit decoder
//!
//! Binarizes the 32 data intervals of a frame against a fixed threshold and
//! shifts the bits in most-significant first. An interval exactly equal to
//! the threshold decodes as 0.

use core::fmt;

use super::capture::{EdgeSample, Frame};

/// 32-bit code decoded from one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command(u32);

impl Command {
    /// Wrap a raw code
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Raw 32-bit code
    pub const fn code(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// Threshold-based pulse-distance decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDecoder {
    logical_one_threshold: u32,
}

impl BitDecoder {
    /// Create a decoder; intervals strictly above `logical_one_threshold`
    /// ticks decode as 1
    pub const fn new(logical_one_threshold: u32) -> Self {
        Self {
            logical_one_threshold,
        }
    }

    /// Decode a single interval
    #[inline]
    pub fn bit(&self, sample: EdgeSample) -> bool {
        sample.ticks() > self.logical_one_threshold
    }

    /// Decode the data intervals of `frame`
    pub fn decode(&self, frame: &Frame) -> Command {
        let code = frame
            .data_samples()
            .iter()
            .fold(0u32, |acc, &sample| (acc << 1) | u32::from(self.bit(sample)));
        Command(code)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::ir::{DATA_START, FRAME_LEN};
    use std::format;

    const THRESHOLD: u32 = 1_750;
    const ZERO: u32 = 1_125;
    const ONE: u32 = 2_250;

    fn frame_for(code: u32) -> Frame {
        let mut samples = [EdgeSample::from_ticks(0); FRAME_LEN];
        samples[0] = EdgeSample::from_ticks(u32::MAX);
        samples[1] = EdgeSample::from_ticks(5_060);
        for bit in 0..32 {
            let set = code & (1 << (31 - bit)) != 0;
            samples[DATA_START + bit] = EdgeSample::from_ticks(if set { ONE } else { ZERO });
        }
        Frame::from_samples(samples)
    }

    #[test]
    fn threshold_boundary() {
        let decoder = BitDecoder::new(THRESHOLD);
        assert!(!decoder.bit(EdgeSample::from_ticks(0)));
        assert!(!decoder.bit(EdgeSample::from_ticks(THRESHOLD - 1)));
        assert!(!decoder.bit(EdgeSample::from_ticks(THRESHOLD)));
        assert!(decoder.bit(EdgeSample::from_ticks(THRESHOLD + 1)));
        assert!(decoder.bit(EdgeSample::from_ticks(u32::MAX)));
    }

    #[test]
    fn decodes_msb_first() {
        let decoder = BitDecoder::new(THRESHOLD);
        assert_eq!(decoder.decode(&frame_for(0x61A0_42BD)).code(), 0x61A0_42BD);
        assert_eq!(decoder.decode(&frame_for(0x8000_0000)).code(), 0x8000_0000);
        assert_eq!(decoder.decode(&frame_for(0x0000_0001)).code(), 0x0000_0001);
    }

    #[test]
    fn start_artifacts_are_ignored() {
        let decoder = BitDecoder::new(THRESHOLD);
        let mut samples = *frame_for(0).samples();
        samples[0] = EdgeSample::from_ticks(ONE);
        samples[1] = EdgeSample::from_ticks(ONE);
        assert_eq!(decoder.decode(&Frame::from_samples(samples)).code(), 0);
    }

    #[test]
    fn decoding_is_deterministic() {
        let decoder = BitDecoder::new(THRESHOLD);
        let frame = frame_for(0x61A0_D02F);
        assert_eq!(decoder.decode(&frame), decoder.decode(&frame));
    }

    #[test]
    fn all_intervals_at_threshold_decode_to_zero() {
        let decoder = BitDecoder::new(THRESHOLD);
        let frame = Frame::from_samples([EdgeSample::from_ticks(THRESHOLD); FRAME_LEN]);
        assert_eq!(decoder.decode(&frame), Command::new(0));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", Command::new(0x61A0_42BD)), "0x61a042bd");
    }
}
