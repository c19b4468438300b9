//! Vehicle side of the pipeline
//!
//! The control loop owns a [`VehicleController`], which turns each decoded
//! [`Command`](crate::ir::Command) into an [`Actuation`] plan. The plan is
//! executed by [`actuate`] against the shared [`VehicleOutputs`], which the
//! emergency-stop context may de-energize at any moment through
//! [`EmergencyStop`].

pub mod actuator;
pub mod command;
pub mod controller;
pub mod estop;
pub mod state;

pub use actuator::{actuate, ActuationOutcome, VehicleOutputs};
pub use command::{codes, Action, CommandTable};
pub use controller::{Actuation, Motion, VehicleController};
pub use estop::EmergencyStop;
pub use state::{SpeedLevel, StatusReport, VehicleState};
