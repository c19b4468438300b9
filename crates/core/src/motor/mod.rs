//! Motor driver abstraction
//!
//! This module drives a two-channel L293D-style H-bridge: each channel has
//! two direction inputs and one PWM enable input. It also covers the two
//! plain digital outputs of the rover, the accessory (lights) line and the
//! reception indicator LEDs.
//!
//! # Design
//!
//! This module is pure `no_std` with no feature gates. Platform-specific
//! pin implementations belong in the firmware crate; `mock` provides host
//! doubles.

pub mod hbridge;
pub mod indicators;
pub mod mock;

pub use hbridge::{ChannelDirection, DirectionPattern, DriveTrain, HBridgeChannel};
pub use indicators::{AccessoryOutput, IndicatorLeds};

use core::fmt;

/// Motor and output control errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Duty cycle outside [0.0, 1.0]
    InvalidDuty,
    /// Pin or PWM hardware rejected the write
    HardwareFault,
}

impl MotorError {
    /// Short description, usable where `Display` is not (defmt)
    pub const fn description(self) -> &'static str {
        match self {
            MotorError::InvalidDuty => "duty cycle out of range",
            MotorError::HardwareFault => "output hardware fault",
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// PWM pin abstraction
///
/// Platform-specific implementations wrap their HAL's PWM types.
pub trait PwmPin {
    /// Set PWM duty cycle as a fraction [0.0, 1.0]
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if PWM hardware fails.
    fn set_duty(&mut self, duty: f32) -> Result<(), MotorError>;
}

/// Push-pull digital output abstraction
pub trait DigitalOut {
    /// Drive the pin high (`true`) or low (`false`)
    ///
    /// # Errors
    ///
    /// Returns `MotorError::HardwareFault` if the pin cannot be driven.
    fn set_level(&mut self, high: bool) -> Result<(), MotorError>;
}
