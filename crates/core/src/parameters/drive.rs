//! Drive train parameters

use super::error::ParameterError;

/// Drive train parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveParams {
    /// Lowest speed level
    pub speed_min: u8,
    /// Highest speed level (maps to 100% duty)
    pub speed_max: u8,
    /// Speed change per speed-up/slow-down command
    pub speed_step: u8,
    /// Speed level at power-up; the rover starts at full speed
    pub initial_speed: u8,
    /// De-energized pause before asserting a new direction (ms)
    pub settle_ms: u32,
    /// Accessory output is on when driven low
    pub accessory_active_low: bool,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            speed_min: 0,
            speed_max: 100,
            speed_step: 10,
            initial_speed: 100,
            settle_ms: 20,
            accessory_active_low: true,
        }
    }
}

impl DriveParams {
    /// Check parameter consistency
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::InvalidConfig` for an empty or inverted speed
    /// range, a zero step, or an initial speed outside the range.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.speed_max == 0 || self.speed_min > self.speed_max {
            return Err(ParameterError::InvalidConfig {
                name: "DRIVE_SPEED_MAX",
            });
        }
        if self.speed_step == 0 {
            return Err(ParameterError::InvalidConfig {
                name: "DRIVE_SPEED_STEP",
            });
        }
        if !(self.speed_min..=self.speed_max).contains(&self.initial_speed) {
            return Err(ParameterError::InvalidConfig {
                name: "DRIVE_INITIAL_SPEED",
            });
        }
        Ok(())
    }
}
