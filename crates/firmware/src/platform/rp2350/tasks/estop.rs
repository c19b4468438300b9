//! Emergency-Stop Task
//!
//! Highest-priority task. Preempts the IR tasks and the control loop, so a
//! trip lands even while the control loop is inside its settling delay.
//!
//! ## Responsibilities
//!
//! - Wait for a rising edge on the e-stop input
//! - Bump the [`ESTOP`] generation and de-energize the drive outputs
//! - Republish the last status as "Stopped" on [`STATUS`]
//!
//! ## Integration
//!
//! The control loop snapshots the `ESTOP` generation before each actuation
//! and skips energizing when it moved. The stop is not latched: the next
//! frame drives again.

use embassy_rp::gpio::Input;

use crate::platform::rp2350::SharedOutputs;
use crate::rover::{emergency_stop, ESTOP, STATUS};

/// Emergency-stop task
///
/// Runs on the highest-priority executor. Every rising edge on the e-stop
/// input de-energizes the motors, whatever the control loop is doing.
///
/// # Example
///
/// ```rust,ignore
/// let spawner = EXECUTOR_ESTOP.start(interrupt::SWI_IRQ_2);
/// spawner.must_spawn(emergency_stop_task(estop_input, outputs));
/// ```
#[embassy_executor::task]
pub async fn emergency_stop_task(mut input: Input<'static>, outputs: &'static SharedOutputs) {
    crate::log_info!("Emergency stop task started");

    loop {
        input.wait_for_rising_edge().await;
        emergency_stop(&ESTOP, outputs, &STATUS);
    }
}
