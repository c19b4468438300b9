//! RP2350 platform implementation for Raspberry Pi Pico 2 W
//!
//! Concrete implementations of the platform traits on `embassy-rp`, plus
//! the Embassy tasks that drive the rover.
//!
//! # Feature Gate
//!
//! This module is only available when the `pico2_w` feature is enabled.

mod gpio;
mod pwm;
pub mod tasks;

pub use gpio::Rp2350Output;
pub use pwm::{embassy_pwm_config, Rp2350Pwm};

use ir_rover_core::vehicle::VehicleOutputs;

use crate::core::traits::EmbassyState;
use crate::libraries::{OutputPin, PwmChannel};

/// Every rover output on RP2350 pins
pub type Rp2350VehicleOutputs = VehicleOutputs<OutputPin<Rp2350Output>, PwmChannel<Rp2350Pwm>>;

/// Outputs shared by the control loop and the emergency-stop task
pub type SharedOutputs = EmbassyState<Rp2350VehicleOutputs>;
