//! Control-loop consumer: dispatch and state mutation
//!
//! The controller is the only writer of [`VehicleState`]. It never touches
//! outputs itself; each handled command yields an [`Actuation`] that the
//! caller hands to [`actuate`](super::actuate).

use super::command::{Action, CommandTable};
use super::state::{StatusReport, VehicleState};
use crate::ir::Command;
use crate::motor::DirectionPattern;
use crate::parameters::DriveParams;

/// What the actuator does with the direction inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Leave direction inputs as they are
    Hold,
    /// De-energize immediately
    Stop,
    /// De-energize, settle, then assert the pattern
    Drive(DirectionPattern),
}

/// Output plan for one dispatched command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actuation {
    pub action: Action,
    /// False when the code was not in the table and fell back to stop
    pub recognized: bool,
    pub motion: Motion,
    /// Duty cycle for both drive channels
    pub duty: f32,
    /// New accessory state, `Some` only when it changed
    pub accessory: Option<bool>,
    pub indicator_parity: bool,
}

/// Dispatcher plus the vehicle state it mutates
#[derive(Debug, Clone)]
pub struct VehicleController {
    table: CommandTable,
    state: VehicleState,
    last_trip: u32,
}

impl VehicleController {
    pub fn new(params: &DriveParams, table: CommandTable) -> Self {
        Self {
            table,
            state: VehicleState::new(params),
            last_trip: 0,
        }
    }

    /// Dispatch `command` and update the state
    pub fn handle(&mut self, command: Command) -> Actuation {
        let recognized = self.table.lookup(command).is_some();
        let action = self.table.dispatch(command);
        let state = &mut self.state;

        state.frames = state.frames.wrapping_add(1);
        state.indicator_parity = !state.indicator_parity;
        state.action = Some(action);

        let mut accessory = None;
        let motion = match action {
            Action::Forward | Action::Backward | Action::Left | Action::Right => {
                let pattern = action.direction().unwrap_or(DirectionPattern::STOP);
                state.motion = pattern;
                Motion::Drive(pattern)
            }
            Action::Stop => {
                state.motion = DirectionPattern::STOP;
                Motion::Stop
            }
            Action::SpeedUp => {
                state.speed.increase();
                Motion::Hold
            }
            Action::SlowDown => {
                state.speed.decrease();
                Motion::Hold
            }
            Action::ToggleAccessory => {
                state.accessory_on = !state.accessory_on;
                accessory = Some(state.accessory_on);
                Motion::Hold
            }
        };

        Actuation {
            action,
            recognized,
            motion,
            duty: state.speed.duty(),
            accessory,
            indicator_parity: state.indicator_parity,
        }
    }

    /// Catch up with emergency-stop trips
    ///
    /// `generation` is the current [`EmergencyStop`](super::EmergencyStop)
    /// generation. If it moved since the last call the outputs were
    /// de-energized behind the controller's back, so the commanded motion
    /// is reset to stop. Returns true in that case.
    pub fn observe_trips(&mut self, generation: u32) -> bool {
        if generation == self.last_trip {
            return false;
        }
        self.last_trip = generation;
        self.state.motion = DirectionPattern::STOP;
        true
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn report(&self) -> StatusReport {
        self.state.report()
    }
}
