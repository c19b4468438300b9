//! IR link: interrupt-side receiver state and the frame hand-off
//!
//! The edge and watchdog tasks share one [`IrReceiver`] behind a critical
//! section. A completed frame leaves the receiver through a bounded channel
//! that only the control loop reads. Sending never blocks: when the queue is
//! full the new frame is dropped and counted.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use ir_rover_core::ir::{Frame, IrReceiver, ReceiverStats, WatchdogOutcome};
use ir_rover_core::parameters::ir::DEFAULT_FRAME_TIMEOUT;
use ir_rover_core::parameters::IrParams;

use crate::core::traits::{EmbassyState, SharedState};

/// Frames that may wait for the control loop
pub const FRAME_QUEUE_DEPTH: usize = 2;

/// Frame hand-off channel
pub type FrameQueue = Channel<CriticalSectionRawMutex, Frame, FRAME_QUEUE_DEPTH>;

/// What an edge did to the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEvent {
    /// Sample stored, frame still incomplete
    Captured,
    /// Frame completed and queued
    Forwarded,
    /// Frame completed but the queue was full
    Dropped,
}

/// Link counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub receiver: ReceiverStats,
    /// Complete frames lost to a full queue
    pub dropped: u32,
}

/// Receiver, hand-off queue and drop counter
pub struct IrLink {
    receiver: EmbassyState<IrReceiver>,
    queue: FrameQueue,
    dropped: AtomicU32,
}

/// The rover's IR link
pub static IR_LINK: IrLink = IrLink::new(DEFAULT_FRAME_TIMEOUT);

impl IrLink {
    pub const fn new(frame_timeout: u32) -> Self {
        Self {
            receiver: EmbassyState::new(IrReceiver::new(frame_timeout)),
            queue: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Apply receiver parameters, discarding any partial frame
    pub fn configure(&self, params: &IrParams) {
        self.receiver.with_mut(|rx| rx.configure(params));
    }

    /// Rising-edge entry point
    pub fn on_edge(&self, now_us: u64) -> EdgeEvent {
        let Some(frame) = self.receiver.with_mut(|rx| rx.on_edge(now_us)) else {
            return EdgeEvent::Captured;
        };
        match self.queue.try_send(frame) {
            Ok(()) => EdgeEvent::Forwarded,
            Err(_) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                EdgeEvent::Dropped
            }
        }
    }

    /// Watchdog poll entry point
    pub fn on_watchdog_tick(&self, now_us: u64) -> WatchdogOutcome {
        self.receiver.with_mut(|rx| rx.on_watchdog_tick(now_us))
    }

    /// Wait for the next complete frame
    pub async fn receive(&self) -> Frame {
        self.queue.receive().await
    }

    /// Next frame if one is waiting
    pub fn try_receive(&self) -> Option<Frame> {
        self.queue.try_receive().ok()
    }

    pub fn stats(&self) -> LinkStats {
        LinkStats {
            receiver: self.receiver.with(|rx| rx.stats()),
            dropped: self.dropped.load(Ordering::Relaxed),
        }
    }
}
