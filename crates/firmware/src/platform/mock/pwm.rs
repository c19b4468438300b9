//! Mock PWM implementation for testing

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{pwm::PwmConfig, PwmInterface},
    Result,
};

/// Mock PWM channel
///
/// Quantizes the duty cycle to the configured counter resolution the way
/// the hardware compare register does.
#[derive(Debug)]
pub struct MockPwm {
    top: u16,
    compare: u16,
}

impl MockPwm {
    /// Create a new mock PWM channel at 0% duty
    pub fn new(config: PwmConfig) -> Self {
        Self {
            top: config.top,
            compare: 0,
        }
    }

    /// Raw compare value
    pub fn compare(&self) -> u16 {
        self.compare
    }
}

impl PwmInterface for MockPwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }
        self.compare = (duty_cycle * f32::from(self.top)) as u16;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        f32::from(self.compare) / f32::from(self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pwm_duty_cycle() {
        let mut pwm = MockPwm::new(PwmConfig::default());
        assert_eq!(pwm.duty_cycle(), 0.0);

        pwm.set_duty_cycle(1.0).unwrap();
        assert_eq!(pwm.compare(), 255);

        pwm.set_duty_cycle(0.5).unwrap();
        assert_eq!(pwm.compare(), 127);

        assert_eq!(
            pwm.set_duty_cycle(1.1),
            Err(PlatformError::Pwm(PwmError::InvalidDutyCycle))
        );
        assert_eq!(pwm.compare(), 127);
    }
}
