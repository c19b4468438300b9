//! Host test doubles for output pins

use super::{DigitalOut, MotorError, PwmPin};

/// Digital output that records its level
#[derive(Debug, Default)]
pub struct MockPin {
    high: bool,
    writes: u32,
    fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every write fails with `HardwareFault`
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn is_high(&self) -> bool {
        self.high
    }

    /// Number of successful writes
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl DigitalOut for MockPin {
    fn set_level(&mut self, high: bool) -> Result<(), MotorError> {
        if self.fail {
            return Err(MotorError::HardwareFault);
        }
        self.high = high;
        self.writes += 1;
        Ok(())
    }
}

/// PWM pin that records its duty cycle
#[derive(Debug, Default)]
pub struct MockPwmPin {
    duty: f32,
}

impl MockPwmPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty(&self) -> f32 {
        self.duty
    }
}

impl PwmPin for MockPwmPin {
    fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        if !(0.0..=1.0).contains(&duty) {
            return Err(MotorError::InvalidDuty);
        }
        self.duty = duty;
        Ok(())
    }
}
