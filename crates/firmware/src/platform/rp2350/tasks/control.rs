//! Control Loop Task
//!
//! Thread-mode task that owns the vehicle state. It sleeps until a frame
//! arrives, then decodes, dispatches and actuates it. The settling delay is
//! an async wait, so the interrupt executors keep running during it.
//!
//! ## Responsibilities
//!
//! - Publish the initial "Waiting" status
//! - Await complete frames from [`IR_LINK`]
//! - Run each frame through [`RoverControl::process`]
//! - Publish the resulting status and log receiver statistics
//!
//! ## Integration
//!
//! This task requires:
//! - `IR_LINK` configured and fed by the edge capture and watchdog tasks
//! - Outputs initialized and shared with the emergency-stop task

use embassy_time::Delay;

use crate::platform::rp2350::SharedOutputs;
use crate::libraries::IR_LINK;
use crate::rover::{RoverControl, ESTOP, STATUS};

/// Control loop task
///
/// # Arguments
///
/// * `control` - Decoder and vehicle controller
/// * `outputs` - Outputs shared with the emergency-stop task
///
/// # Example
///
/// ```rust,ignore
/// let control = RoverControl::new(&params);
/// executor.run(|spawner| {
///     spawner.must_spawn(control_loop_task(control, outputs));
/// });
/// ```
#[embassy_executor::task]
pub async fn control_loop_task(mut control: RoverControl, outputs: &'static SharedOutputs) {
    crate::log_info!("Control loop task started");

    let report = control.report();
    crate::log_info!("Status: {}", report.status_line().as_str());
    STATUS.publish(report);

    let mut delay = Delay;
    loop {
        let frame = IR_LINK.receive().await;
        let report = control.process(&frame, outputs, &ESTOP, &mut delay).await;
        STATUS.publish(report);

        let stats = IR_LINK.stats();
        crate::log_debug!(
            "Status: {} (frames {}, aborted {}, dropped {})",
            report.status_line().as_str(),
            stats.receiver.frames,
            stats.receiver.aborted,
            stats.dropped
        );
    }
}
