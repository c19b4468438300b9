//! Platform error types
//!
//! Errors raised by the pin and PWM drivers. They cross into the core crate
//! as [`MotorError`] through the `From` impl below.

use core::fmt;

use ir_rover_core::motor::MotorError;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Errors from the output drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    Pwm(PwmError),
    Gpio(GpioError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Duty outside `[0.0, 1.0]`
    InvalidDutyCycle,
    /// The slice half was not configured or rejected the compare value
    ChannelUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The pin could not be driven
    HardwareError,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Pwm(PwmError::InvalidDutyCycle) => f.write_str("PWM duty out of range"),
            PlatformError::Pwm(PwmError::ChannelUnavailable) => {
                f.write_str("PWM channel unavailable")
            }
            PlatformError::Gpio(GpioError::HardwareError) => f.write_str("GPIO write failed"),
        }
    }
}

impl From<PlatformError> for MotorError {
    fn from(e: PlatformError) -> Self {
        match e {
            PlatformError::Pwm(PwmError::InvalidDutyCycle) => MotorError::InvalidDuty,
            PlatformError::Pwm(PwmError::ChannelUnavailable)
            | PlatformError::Gpio(GpioError::HardwareError) => MotorError::HardwareFault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duty_errors_keep_their_meaning() {
        assert_eq!(
            MotorError::from(PlatformError::Pwm(PwmError::InvalidDutyCycle)),
            MotorError::InvalidDuty
        );
        assert_eq!(
            MotorError::from(PlatformError::Pwm(PwmError::ChannelUnavailable)),
            MotorError::HardwareFault
        );
        assert_eq!(
            MotorError::from(PlatformError::Gpio(GpioError::HardwareError)),
            MotorError::HardwareFault
        );
    }

    #[test]
    fn display() {
        let text = format!("{}", PlatformError::Gpio(GpioError::HardwareError));
        assert_eq!(text, "GPIO write failed");
    }
}
