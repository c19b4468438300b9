//! PWM output trait for the motor enable lines

use crate::platform::Result;

/// Slice setup shared by both enable lines
#[derive(Debug, Clone, Copy)]
pub struct PwmConfig {
    /// Counter wrap value; duty resolution is `top + 1` steps
    pub top: u16,
    /// Integer clock divider
    pub divider: u8,
}

impl Default for PwmConfig {
    fn default() -> Self {
        // 8-bit resolution, ~2.3 kHz at 150 MHz
        Self {
            top: 255,
            divider: 255,
        }
    }
}

/// One PWM channel driving an H-bridge enable input
///
/// Implementations own their channel exclusively.
pub trait PwmInterface {
    /// Set duty as a fraction of full scale
    ///
    /// Values outside `[0.0, 1.0]` are rejected with
    /// `PwmError::InvalidDutyCycle` and leave the output unchanged.
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()>;

    /// Last duty written
    fn duty_cycle(&self) -> f32;
}
