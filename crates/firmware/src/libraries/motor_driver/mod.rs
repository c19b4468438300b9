//! Motor driver adapters (firmware wrapper)
//!
//! Wraps platform GPIO and PWM implementations so they satisfy the core
//! crate's [`DigitalOut`] and [`PwmPin`] traits. Platform errors are mapped
//! to [`MotorError`] at this seam.
//!
//! ## Example
//!
//! ```ignore
//! use ir_rover_core::motor::{DriveTrain, HBridgeChannel};
//! use ir_rover_firmware::libraries::{OutputPin, PwmChannel};
//!
//! let left = HBridgeChannel::new(OutputPin::new(in1), OutputPin::new(in2), PwmChannel::new(en));
//! ```

use ir_rover_core::motor::{DigitalOut, MotorError, PwmPin};

use crate::platform::traits::{GpioInterface, PwmInterface};

/// GPIO output usable as a motor direction, accessory or LED line
pub struct OutputPin<G: GpioInterface> {
    gpio: G,
}

impl<G: GpioInterface> OutputPin<G> {
    pub fn new(gpio: G) -> Self {
        Self { gpio }
    }

    pub fn gpio(&self) -> &G {
        &self.gpio
    }
}

impl<G: GpioInterface> DigitalOut for OutputPin<G> {
    #[inline]
    fn set_level(&mut self, high: bool) -> Result<(), MotorError> {
        self.gpio.set_level(high).map_err(MotorError::from)
    }
}

/// PWM channel usable as an H-bridge enable input
pub struct PwmChannel<P: PwmInterface> {
    pwm: P,
}

impl<P: PwmInterface> PwmChannel<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

impl<P: PwmInterface> PwmPin for PwmChannel<P> {
    #[inline]
    fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        self.pwm.set_duty_cycle(duty).map_err(MotorError::from)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use ir_rover_core::motor::{
        AccessoryOutput, DirectionPattern, DriveTrain, HBridgeChannel, IndicatorLeds,
    };
    use ir_rover_core::vehicle::VehicleOutputs;

    use super::*;
    use crate::platform::mock::{MockGpio, MockPwm};
    use crate::platform::traits::pwm::PwmConfig;

    pub(crate) type MockOutputs = VehicleOutputs<OutputPin<MockGpio>, PwmChannel<MockPwm>>;

    fn channel() -> HBridgeChannel<OutputPin<MockGpio>, PwmChannel<MockPwm>> {
        HBridgeChannel::new(
            OutputPin::new(MockGpio::new_output()),
            OutputPin::new(MockGpio::new_output()),
            PwmChannel::new(MockPwm::new(PwmConfig::default())),
        )
    }

    pub(crate) fn mock_outputs() -> MockOutputs {
        let mut outputs = VehicleOutputs::new(
            DriveTrain::new(channel(), channel()),
            AccessoryOutput::new(OutputPin::new(MockGpio::new_output()), true),
            IndicatorLeds::new(
                OutputPin::new(MockGpio::new_output()),
                OutputPin::new(MockGpio::new_output()),
            ),
        );
        outputs.initialize().unwrap();
        outputs
    }

    #[test]
    fn drive_train_over_platform_pins() {
        let mut outputs = mock_outputs();
        outputs.drive.apply_pattern(DirectionPattern::FORWARD).unwrap();
        outputs.drive.set_duty(0.5).unwrap();

        let (in1, in2, en) = outputs.drive.left().pins();
        assert!(in1.gpio().is_set_high());
        assert!(!in2.gpio().is_set_high());
        assert_eq!(en.pwm().compare(), 127);
    }

    #[test]
    fn gpio_fault_becomes_hardware_fault() {
        let mut pin = OutputPin::new(MockGpio::faulty());
        assert_eq!(pin.set_level(true), Err(MotorError::HardwareFault));
    }

    #[test]
    fn invalid_duty_is_reported() {
        let mut pwm = PwmChannel::new(MockPwm::new(PwmConfig::default()));
        assert_eq!(pwm.set_duty(2.0), Err(MotorError::InvalidDuty));
    }

    #[test]
    fn initialize_turns_accessory_off_active_low() {
        let outputs = mock_outputs();
        assert!(outputs.accessory.pin().gpio().is_set_high());
        let (green, red) = outputs.indicator.pins();
        assert!(green.gpio().is_set_high());
        assert!(!red.gpio().is_set_high());
    }
}
