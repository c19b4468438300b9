//! Rover control
//!
//! The control loop body and the emergency-stop handler, written against
//! the core traits so they run unchanged on host with mock pins. The
//! Embassy tasks in `platform::rp2350::tasks` are thin loops around these.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;
use ir_rover_core::ir::{BitDecoder, Frame};
use ir_rover_core::motor::{DigitalOut, PwmPin};
use ir_rover_core::vehicle::{
    actuate, Action, ActuationOutcome, CommandTable, EmergencyStop, StatusReport,
    VehicleController, VehicleOutputs,
};

use crate::core::traits::{EmbassyState, SharedState};
use crate::parameters::BoardParams;

/// Emergency-stop trip counter shared by the e-stop task and the actuator
pub static ESTOP: EmergencyStop = EmergencyStop::new();

/// Status feed for the display collaborator
pub static STATUS: StatusBoard = StatusBoard::new();

/// Latest status plus a change signal
///
/// Written by the control loop after every frame and by the e-stop handler
/// after a trip. The e-stop side has no access to the vehicle state, so it
/// republishes the last report with the action replaced by `Stop`.
pub struct StatusBoard {
    last: EmbassyState<Option<StatusReport>>,
    updated: Signal<CriticalSectionRawMutex, StatusReport>,
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBoard {
    pub const fn new() -> Self {
        Self {
            last: EmbassyState::new(None),
            updated: Signal::new(),
        }
    }

    pub fn publish(&self, report: StatusReport) {
        self.last.with_mut(|last| *last = Some(report));
        self.updated.signal(report);
    }

    /// Republish the last report as stopped
    pub fn publish_stopped(&self) -> StatusReport {
        let report = self.last.with_mut(|last| {
            let report = StatusReport {
                action: Some(Action::Stop),
                ..last.unwrap_or(StatusReport {
                    action: None,
                    speed: 0,
                    accessory_on: false,
                })
            };
            *last = Some(report);
            report
        });
        self.updated.signal(report);
        report
    }

    /// Most recent report, if any was published
    pub fn last(&self) -> Option<StatusReport> {
        self.last.with(|last| *last)
    }

    /// Wait for the next published report
    pub async fn wait(&self) -> StatusReport {
        self.updated.wait().await
    }
}

/// Decode → dispatch → actuate, one frame at a time
pub struct RoverControl {
    decoder: BitDecoder,
    controller: VehicleController,
    settle_ms: u32,
}

impl RoverControl {
    pub fn new(params: &BoardParams) -> Self {
        Self {
            decoder: BitDecoder::new(params.ir.logical_one_threshold),
            controller: VehicleController::new(&params.drive, CommandTable::default()),
            settle_ms: params.drive.settle_ms,
        }
    }

    pub fn report(&self) -> StatusReport {
        self.controller.report()
    }

    /// Handle one complete frame and return the resulting status
    ///
    /// Actuator faults are logged and do not stop the loop.
    pub async fn process<S, D, P, W>(
        &mut self,
        frame: &Frame,
        outputs: &S,
        estop: &EmergencyStop,
        delay: &mut W,
    ) -> StatusReport
    where
        S: SharedState<VehicleOutputs<D, P>>,
        D: DigitalOut,
        P: PwmPin,
        W: DelayNs,
    {
        let command = self.decoder.decode(frame);
        let generation = estop.generation();
        if self.controller.observe_trips(generation) {
            crate::log_info!("Resuming after emergency stop");
        }

        let plan = self.controller.handle(command);
        if !plan.recognized {
            crate::log_warn!("Unknown command {:#x}, stopping", command.code());
        }

        let label = plan.action.label();
        match actuate(&plan, outputs, estop, generation, self.settle_ms, delay).await {
            Ok(ActuationOutcome::Applied) => {
                crate::log_info!(
                    "{} (speed {})",
                    label,
                    self.controller.state().speed.value()
                );
            }
            Ok(ActuationOutcome::Preempted) => {
                crate::log_warn!("{} preempted by emergency stop", label);
            }
            Err(e) => {
                crate::log_error!("Actuation failed ({}): {}", label, e.description());
            }
        }

        self.report()
    }
}

/// Emergency-stop handler body
///
/// Touches only the outputs, the trip counter and the status feed, never
/// the IR receiver or the vehicle state. The display shows "Stopped" once
/// the outputs are de-energized.
pub fn emergency_stop<S, D, P>(estop: &EmergencyStop, outputs: &S, status: &StatusBoard)
where
    S: SharedState<VehicleOutputs<D, P>>,
    D: DigitalOut,
    P: PwmPin,
{
    match estop.trip_and_stop(outputs) {
        Ok(generation) => {
            let report = status.publish_stopped();
            crate::log_warn!(
                "Emergency stop #{}: {}",
                generation,
                report.status_line().as_str()
            );
        }
        Err(e) => crate::log_error!("Emergency stop failed: {}", e.description()),
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use ir_rover_core::ir::{EdgeSample, FRAME_LEN};
    use ir_rover_core::motor::DirectionPattern;
    use ir_rover_core::vehicle::codes;

    use super::*;
    use crate::core::traits::MockState;
    use crate::libraries::motor_driver::tests::{mock_outputs, MockOutputs};
    use crate::platform::traits::GpioInterface;

    struct NoDelay;

    impl DelayNs for NoDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Trips the stop while the actuator settles
    struct StopDuringSettle<'a> {
        estop: &'a EmergencyStop,
        outputs: &'a MockState<MockOutputs>,
        status: &'a StatusBoard,
    }

    impl DelayNs for StopDuringSettle<'_> {
        async fn delay_ns(&mut self, _ns: u32) {
            emergency_stop(self.estop, self.outputs, self.status);
        }
    }

    fn frame(code: u32) -> Frame {
        let mut samples = [EdgeSample::from_ticks(4_500); FRAME_LEN];
        for (i, sample) in samples[2..].iter_mut().enumerate() {
            let bit = (code >> (31 - i)) & 1;
            *sample = EdgeSample::from_ticks(if bit == 1 { 2_250 } else { 1_125 });
        }
        Frame::from_samples(samples)
    }

    #[test]
    fn forward_frame_drives_forward() {
        let mut control = RoverControl::new(&BoardParams::default());
        let outputs = MockState::new(mock_outputs());
        let estop = EmergencyStop::new();

        let report = block_on(control.process(&frame(codes::UP), &outputs, &estop, &mut NoDelay));

        assert_eq!(report.label(), "Forward");
        assert_eq!(report.speed, 100);
        outputs.with(|o| assert_eq!(o.drive.duty(), 1.0));
        outputs.with(|o| assert_eq!(o.drive.pattern(), DirectionPattern::FORWARD));
    }

    #[test]
    fn unknown_frame_stops() {
        let mut control = RoverControl::new(&BoardParams::default());
        let outputs = MockState::new(mock_outputs());
        let estop = EmergencyStop::new();

        block_on(control.process(&frame(codes::DOWN), &outputs, &estop, &mut NoDelay));
        let report = block_on(control.process(&frame(0), &outputs, &estop, &mut NoDelay));

        assert_eq!(report.label(), "Stopped");
        outputs.with(|o| assert_eq!(o.drive.pattern(), DirectionPattern::STOP));
    }

    #[test]
    fn stop_during_settle_wins() {
        let mut control = RoverControl::new(&BoardParams::default());
        let outputs = MockState::new(mock_outputs());
        let estop = EmergencyStop::new();
        let status = StatusBoard::new();
        let mut delay = StopDuringSettle {
            estop: &estop,
            outputs: &outputs,
            status: &status,
        };

        block_on(control.process(&frame(codes::UP), &outputs, &estop, &mut delay));

        assert_eq!(estop.generation(), 1);
        assert_eq!(status.last().map(|r| r.label()), Some("Stopped"));
        outputs.with(|o| {
            assert_eq!(o.drive.pattern(), DirectionPattern::STOP);
            let (in1, in2, _) = o.drive.left().pins();
            assert!(!in1.gpio().is_set_high());
            assert!(!in2.gpio().is_set_high());
        });

        block_on(control.process(&frame(codes::LEFT), &outputs, &estop, &mut NoDelay));
        outputs.with(|o| assert_eq!(o.drive.pattern(), DirectionPattern::PIVOT_LEFT));
    }

    #[test]
    fn emergency_stop_leaves_vehicle_state_alone() {
        let mut control = RoverControl::new(&BoardParams::default());
        let outputs = MockState::new(mock_outputs());
        let estop = EmergencyStop::new();
        block_on(control.process(&frame(codes::CHANNEL_DOWN), &outputs, &estop, &mut NoDelay));

        emergency_stop(&estop, &outputs, &StatusBoard::new());

        assert_eq!(control.report().speed, 90);
        outputs.with(|o| assert_eq!(o.drive.duty(), 0.0));
    }

    #[test]
    fn emergency_stop_publishes_stopped_status() {
        let mut control = RoverControl::new(&BoardParams::default());
        let outputs = MockState::new(mock_outputs());
        let estop = EmergencyStop::new();
        let status = StatusBoard::new();

        let report = block_on(control.process(&frame(codes::MUTE), &outputs, &estop, &mut NoDelay));
        status.publish(block_on(control.process(
            &frame(codes::UP),
            &outputs,
            &estop,
            &mut NoDelay,
        )));
        assert!(report.accessory_on);
        assert_eq!(block_on(status.wait()).label(), "Forward");

        emergency_stop(&estop, &outputs, &status);

        let stopped = block_on(status.wait());
        assert_eq!(stopped.label(), "Stopped");
        assert_eq!(stopped.speed, 100);
        assert!(stopped.accessory_on);
        assert_eq!(status.last(), Some(stopped));
        assert_eq!(stopped.status_line().as_str(), "Stopped 100% lights");
    }

    #[test]
    fn emergency_stop_before_first_report_still_says_stopped() {
        let outputs = MockState::new(mock_outputs());
        let status = StatusBoard::new();

        emergency_stop(&EmergencyStop::new(), &outputs, &status);

        assert_eq!(status.last().map(|r| r.label()), Some("Stopped"));
    }
}
