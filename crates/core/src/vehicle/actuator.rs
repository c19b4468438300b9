//! Motor/accessory actuator
//!
//! Executes an [`Actuation`] plan against the shared outputs. Direction
//! changes go through a de-energized settling pause so forward and reverse
//! are never asserted back to back. The pause is an async delay; other
//! contexts, the emergency stop in particular, keep running during it.

use embedded_hal_async::delay::DelayNs;

use super::controller::{Actuation, Motion};
use super::estop::EmergencyStop;
use crate::motor::{AccessoryOutput, DigitalOut, DriveTrain, IndicatorLeds, MotorError, PwmPin};
use crate::traits::SharedState;

/// Every output the vehicle drives
pub struct VehicleOutputs<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    pub drive: DriveTrain<D, P>,
    pub accessory: AccessoryOutput<D>,
    pub indicator: IndicatorLeds<D>,
}

impl<D, P> VehicleOutputs<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    pub fn new(
        drive: DriveTrain<D, P>,
        accessory: AccessoryOutput<D>,
        indicator: IndicatorLeds<D>,
    ) -> Self {
        Self {
            drive,
            accessory,
            indicator,
        }
    }

    /// Power-up state: motors de-energized at zero duty, accessory off,
    /// green indicator lit
    pub fn initialize(&mut self) -> Result<(), MotorError> {
        self.de_energize()?;
        self.accessory.set(false)?;
        self.indicator.show(false)
    }

    /// Direction inputs low and zero duty on both channels
    pub fn de_energize(&mut self) -> Result<(), MotorError> {
        self.drive.de_energize()?;
        self.drive.set_duty(0.0)
    }
}

/// Result of executing a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuationOutcome {
    /// Plan fully applied
    Applied,
    /// An emergency stop tripped during the dispatch; motors left
    /// de-energized
    Preempted,
}

/// Apply `plan` to `outputs`
///
/// `generation` is the [`EmergencyStop`] generation read when the dispatch
/// started. It is re-checked inside the critical section that would
/// energize the motors.
///
/// # Errors
///
/// Returns the first `MotorError` raised by an output. Outputs written
/// before the failure keep their new state.
pub async fn actuate<S, D, P, W>(
    plan: &Actuation,
    outputs: &S,
    estop: &EmergencyStop,
    generation: u32,
    settle_ms: u32,
    delay: &mut W,
) -> Result<ActuationOutcome, MotorError>
where
    S: SharedState<VehicleOutputs<D, P>>,
    D: DigitalOut,
    P: PwmPin,
    W: DelayNs,
{
    outputs.with_mut(|o| -> Result<(), MotorError> {
        o.indicator.show(plan.indicator_parity)?;
        if let Some(on) = plan.accessory {
            o.accessory.set(on)?;
        }
        Ok(())
    })?;

    match plan.motion {
        Motion::Hold => {}
        Motion::Stop => outputs.with_mut(|o| o.drive.de_energize())?,
        Motion::Drive(pattern) => {
            outputs.with_mut(|o| o.drive.de_energize())?;
            delay.delay_ms(settle_ms).await;
            let preempted = outputs.with_mut(|o| -> Result<bool, MotorError> {
                if estop.tripped_since(generation) {
                    return Ok(true);
                }
                o.drive.apply_pattern(pattern)?;
                Ok(false)
            })?;
            if preempted {
                return Ok(ActuationOutcome::Preempted);
            }
        }
    }

    outputs.with_mut(|o| -> Result<ActuationOutcome, MotorError> {
        if estop.tripped_since(generation) {
            return Ok(ActuationOutcome::Preempted);
        }
        o.drive.set_duty(plan.duty)?;
        Ok(ActuationOutcome::Applied)
    })
}
