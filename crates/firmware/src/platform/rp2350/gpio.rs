//! RP2350 GPIO output implementation

use embassy_rp::gpio::Output;

use crate::platform::{traits::GpioInterface, Result};

/// RP2350 push-pull output
///
/// Wraps an `embassy-rp` output to implement the `GpioInterface` trait.
/// Writes to SIO cannot fail.
pub struct Rp2350Output {
    pin: Output<'static>,
}

impl Rp2350Output {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl GpioInterface for Rp2350Output {
    fn set_high(&mut self) -> Result<()> {
        self.pin.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.pin.set_low();
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
