//! IR remote-control frame acquisition and decoding
//!
//! A button press on the remote arrives as a pulse-distance modulated burst
//! train. The receiver timestamps every rising edge of the demodulated
//! signal; each interval between two rising edges is one [`EdgeSample`].
//!
//! # Frame Layout
//!
//! ```text
//! index:   0        1         2 .. 33
//!          leader   start     32 data bits, MSB first
//!          (junk)   (~5 ms)   short (~1.1 ms) = 0, long (~2.25 ms) = 1
//! ```
//!
//! Indices 0 and 1 are start-bit artifacts and carry no command
//! information; the stop burst closes the last data interval.
//!
//! # Recovery
//!
//! There is no checksum. A partial frame is discarded by the
//! [`FrameWatchdog`] once the line has been idle for longer than any legal
//! bit period; a corrupted but complete frame decodes to a code that is not
//! in the command table and ends up as a stop.

pub mod capture;
pub mod decode;
pub mod edge_timer;
pub mod receiver;
pub mod watchdog;

pub use capture::{Capture, EdgeSample, Frame, FrameBuffer};
pub use decode::{BitDecoder, Command};
pub use edge_timer::EdgeTimer;
pub use receiver::{IrReceiver, ReceiverStats};
pub use watchdog::{FrameWatchdog, WatchdogOutcome};

/// Number of edge intervals in one frame (start + 32 data + stop)
pub const FRAME_LEN: usize = 34;

/// Index of the first data-bit interval
pub const DATA_START: usize = 2;
