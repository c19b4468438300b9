//! IR Receiver Tasks
//!
//! Both tasks run on the high-priority interrupt executor and only touch
//! [`IR_LINK`]. Neither blocks beyond its wait for the next event.
//!
//! ## Responsibilities
//!
//! - `edge_capture_task`: timestamp rising edges and hand complete frames to
//!   the control loop (dropped frames are logged)
//! - `frame_watchdog_task`: discard a partial frame once the line has been
//!   idle for the frame timeout
//!
//! ## Integration
//!
//! Both tasks must share one executor so edge capture and watchdog ticks
//! never preempt each other. `IR_LINK.configure` runs before they are
//! spawned.

use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};
use ir_rover_core::ir::WatchdogOutcome;
use ir_rover_core::traits::TimeSource;

use crate::libraries::{EdgeEvent, IR_LINK};
use crate::platform::EmbassyTime;

/// Edge capture task
///
/// Timestamps every rising edge of the IR receiver output.
#[embassy_executor::task]
pub async fn edge_capture_task(mut ir: Input<'static>) {
    crate::log_info!("Edge capture task started");
    let time = EmbassyTime;

    loop {
        ir.wait_for_rising_edge().await;
        if IR_LINK.on_edge(time.now_us()) == EdgeEvent::Dropped {
            crate::log_warn!("Frame queue full, frame dropped");
        }
    }
}

/// Frame timeout watchdog task
///
/// Polls every `poll_us` and discards a partial frame once the line has
/// been idle for the frame timeout.
///
/// # Example
///
/// ```rust,ignore
/// let spawner = EXECUTOR_IR.start(interrupt::SWI_IRQ_1);
/// spawner.must_spawn(edge_capture_task(ir_input));
/// spawner.must_spawn(frame_watchdog_task(params.ir.watchdog_poll_us));
/// ```
#[embassy_executor::task]
pub async fn frame_watchdog_task(poll_us: u32) {
    crate::log_info!("Frame watchdog task started ({} us poll)", poll_us);
    let time = EmbassyTime;
    let mut ticker = Ticker::every(Duration::from_micros(u64::from(poll_us)));

    loop {
        ticker.next().await;
        if let WatchdogOutcome::Aborted { discarded } = IR_LINK.on_watchdog_tick(time.now_us()) {
            crate::log_debug!("Partial frame discarded ({} edges)", discarded);
        }
    }
}
