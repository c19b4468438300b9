//! IR receiver parameters
//!
//! # Units
//!
//! All durations are edge-timer ticks. The RP2350 timer ticks at 1 MHz, so
//! the defaults below are microseconds. They are the ATmega32 values of the
//! original rover (8 MHz, prescaler 1) rescaled:
//!
//! | Parameter        | 8 MHz ticks | 1 MHz ticks |
//! |------------------|-------------|-------------|
//! | logical one      | 14 000      | 1 750       |
//! | frame timeout    | 65 536      | 8 192       |

use super::error::ParameterError;

/// Interval above which a data bit decodes as 1 (ticks)
pub const DEFAULT_LOGICAL_ONE_THRESHOLD: u32 = 1_750;

/// Idle time after the last edge that aborts a partial frame (ticks)
pub const DEFAULT_FRAME_TIMEOUT: u32 = 8_192;

/// How often the firmware polls the frame watchdog (microseconds)
pub const DEFAULT_WATCHDOG_POLL_US: u32 = 1_000;

/// IR receiver parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrParams {
    /// Bit decode threshold; `interval > threshold` decodes as 1
    pub logical_one_threshold: u32,
    /// Frame watchdog period
    ///
    /// Must exceed every legitimate inter-edge spacing (the 5.06 ms NEC
    /// start space is the longest) and stay below the gap between two
    /// transmissions.
    pub frame_timeout: u32,
    /// Watchdog polling period in microseconds
    pub watchdog_poll_us: u32,
}

impl Default for IrParams {
    fn default() -> Self {
        Self {
            logical_one_threshold: DEFAULT_LOGICAL_ONE_THRESHOLD,
            frame_timeout: DEFAULT_FRAME_TIMEOUT,
            watchdog_poll_us: DEFAULT_WATCHDOG_POLL_US,
        }
    }
}

impl IrParams {
    /// Check parameter consistency
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidConfig` when the threshold is zero,
    /// the timeout does not exceed the threshold, or the poll period is zero
    /// or not shorter than the timeout.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.logical_one_threshold == 0 {
            return Err(ParameterError::InvalidConfig {
                name: "IR_LOGICAL_ONE",
            });
        }
        if self.frame_timeout <= self.logical_one_threshold {
            return Err(ParameterError::InvalidConfig {
                name: "IR_FRAME_TIMEOUT",
            });
        }
        if self.watchdog_poll_us == 0 || self.watchdog_poll_us >= self.frame_timeout {
            return Err(ParameterError::InvalidConfig {
                name: "IR_WATCHDOG_POLL",
            });
        }
        Ok(())
    }
}
