//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::GpioInterface,
    Result,
};

/// Mock GPIO output
///
/// Tracks the pin level and the number of writes for test verification.
#[derive(Debug, Default)]
pub struct MockGpio {
    state: bool,
    writes: u32,
    faulty: bool,
}

impl MockGpio {
    /// Create a new mock output, initially low
    pub fn new_output() -> Self {
        Self::default()
    }

    /// Create an output whose writes fail with `GpioError::HardwareError`
    pub fn faulty() -> Self {
        Self {
            faulty: true,
            ..Self::default()
        }
    }

    /// Number of successful writes
    pub fn writes(&self) -> u32 {
        self.writes
    }

    fn write(&mut self, high: bool) -> Result<()> {
        if self.faulty {
            return Err(PlatformError::Gpio(GpioError::HardwareError));
        }
        self.state = high;
        self.writes += 1;
        Ok(())
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        self.write(true)
    }

    fn set_low(&mut self) -> Result<()> {
        self.write(false)
    }

    fn is_set_high(&self) -> bool {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.is_set_high());

        gpio.set_high().unwrap();
        assert!(gpio.is_set_high());

        gpio.set_level(false).unwrap();
        assert!(!gpio.is_set_high());
        assert_eq!(gpio.writes(), 2);
    }

    #[test]
    fn test_mock_gpio_fault() {
        let mut gpio = MockGpio::faulty();
        assert_eq!(
            gpio.set_high(),
            Err(PlatformError::Gpio(GpioError::HardwareError))
        );
        assert!(!gpio.is_set_high());
    }
}
