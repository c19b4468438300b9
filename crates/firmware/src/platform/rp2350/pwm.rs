//! RP2350 PWM implementation
//!
//! One PWM slice drives both H-bridge enable inputs: channel A for the left
//! motor, channel B for the right.

use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use embedded_hal::pwm::SetDutyCycle;

use crate::platform::{
    error::{PlatformError, PwmError},
    traits::{pwm::PwmConfig, PwmInterface},
    Result,
};

/// Slice configuration for `config`, both compare registers at 0
pub fn embassy_pwm_config(config: &PwmConfig) -> Config {
    let mut pwm_config = Config::default();
    pwm_config.top = config.top;
    pwm_config.divider = config.divider.into();
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    pwm_config
}

/// One PWM channel of an RP2350 slice
pub struct Rp2350Pwm {
    output: PwmOutput<'static>,
    duty_cycle: f32,
}

impl Rp2350Pwm {
    pub fn new(output: PwmOutput<'static>) -> Self {
        Self {
            output,
            duty_cycle: 0.0,
        }
    }

    /// Split a slice configured with both outputs into (A, B) channels
    ///
    /// # Errors
    ///
    /// Returns `PwmError::ChannelUnavailable` if the slice was created
    /// without one of its outputs.
    pub fn split(pwm: Pwm<'static>) -> Result<(Self, Self)> {
        let (a, b) = pwm.split();
        let unavailable = PlatformError::Pwm(PwmError::ChannelUnavailable);
        let a = a.ok_or(unavailable)?;
        let b = b.ok_or(unavailable)?;
        Ok((Self::new(a), Self::new(b)))
    }
}

impl PwmInterface for Rp2350Pwm {
    fn set_duty_cycle(&mut self, duty_cycle: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&duty_cycle) {
            return Err(PlatformError::Pwm(PwmError::InvalidDutyCycle));
        }

        let max_duty = self.output.max_duty_cycle();
        let value = (duty_cycle * f32::from(max_duty)) as u16;
        self.output
            .set_duty_cycle(value)
            .map_err(|_| PlatformError::Pwm(PwmError::ChannelUnavailable))?;
        self.duty_cycle = duty_cycle;
        Ok(())
    }

    fn duty_cycle(&self) -> f32 {
        self.duty_cycle
    }
}
