//! Accessory and indicator outputs

use super::{DigitalOut, MotorError};

/// Accessory (lights) line with configurable polarity
pub struct AccessoryOutput<D: DigitalOut> {
    pin: D,
    active_low: bool,
    on: bool,
}

impl<D: DigitalOut> AccessoryOutput<D> {
    /// Wrap a pin; the accessory starts off
    pub fn new(pin: D, active_low: bool) -> Self {
        Self {
            pin,
            active_low,
            on: false,
        }
    }

    /// Switch the accessory on or off
    pub fn set(&mut self, on: bool) -> Result<(), MotorError> {
        self.pin.set_level(on != self.active_low)?;
        self.on = on;
        Ok(())
    }

    /// Logical accessory state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Underlying pin
    pub fn pin(&self) -> &D {
        &self.pin
    }
}

/// Green/red LED pair toggled on every decoded frame
pub struct IndicatorLeds<D: DigitalOut> {
    green: D,
    red: D,
}

impl<D: DigitalOut> IndicatorLeds<D> {
    pub fn new(green: D, red: D) -> Self {
        Self { green, red }
    }

    /// Light green for even parity, red for odd
    pub fn show(&mut self, parity: bool) -> Result<(), MotorError> {
        self.green.set_level(!parity)?;
        self.red.set_level(parity)
    }

    /// (green, red) pins
    pub fn pins(&self) -> (&D, &D) {
        (&self.green, &self.red)
    }
}
