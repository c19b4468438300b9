//! GPIO interface trait
//!
//! This module defines the digital output interface that platform
//! implementations must provide.

use crate::platform::Result;

/// GPIO output interface trait
///
/// # Safety Invariants
///
/// - Pin must be configured as a push-pull output before use
/// - Only one owner per GPIO pin instance
pub trait GpioInterface {
    /// Set GPIO pin high (logic level 1)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin cannot be driven.
    fn set_high(&mut self) -> Result<()>;

    /// Set GPIO pin low (logic level 0)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio` if the pin cannot be driven.
    fn set_low(&mut self) -> Result<()>;

    /// Drive the pin to `high`
    fn set_level(&mut self, high: bool) -> Result<()> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }

    /// Current output level
    fn is_set_high(&self) -> bool;
}
