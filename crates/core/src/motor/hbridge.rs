//! H-bridge drive train
//!
//! ## L293D Truth Table (per channel, EN = PWM)
//!
//! | 1A | 2A | Motor State        |
//! |----|----|--------------------|
//! | 0  | 0  | Stop (de-energized)|
//! | 1  | 0  | Forward            |
//! | 0  | 1  | Reverse            |
//! | 1  | 1  | Brake              |
//!
//! ## Direction Pattern Bits
//!
//! | Bit | Output             |
//! |-----|--------------------|
//! | 0   | left motor 1A      |
//! | 1   | left motor 2A      |
//! | 2   | right motor 1A     |
//! | 3   | right motor 2A     |

use super::{DigitalOut, MotorError, PwmPin};

/// Four direction bits across both channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionPattern(u8);

impl DirectionPattern {
    /// All direction inputs low
    pub const STOP: Self = Self(0b0000);
    /// Both motors forward
    pub const FORWARD: Self = Self(0b0101);
    /// Both motors reverse
    pub const BACKWARD: Self = Self(0b1010);
    /// Right motor forward, left motor stopped
    pub const PIVOT_LEFT: Self = Self(0b0100);
    /// Left motor forward, right motor stopped
    pub const PIVOT_RIGHT: Self = Self(0b0001);

    /// Build a pattern from raw bits; bits above 3 are ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1111)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if any direction input is high
    pub const fn is_energized(self) -> bool {
        self.0 != 0
    }

    /// Left channel direction
    pub const fn left(self) -> ChannelDirection {
        ChannelDirection::from_inputs(self.0 & 0b0001 != 0, self.0 & 0b0010 != 0)
    }

    /// Right channel direction
    pub const fn right(self) -> ChannelDirection {
        ChannelDirection::from_inputs(self.0 & 0b0100 != 0, self.0 & 0b1000 != 0)
    }
}

/// State of one H-bridge channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelDirection {
    /// Both inputs low
    Stop,
    /// 1A high, 2A low
    Forward,
    /// 1A low, 2A high
    Reverse,
    /// Both inputs high
    Brake,
}

impl ChannelDirection {
    const fn from_inputs(in1: bool, in2: bool) -> Self {
        match (in1, in2) {
            (false, false) => ChannelDirection::Stop,
            (true, false) => ChannelDirection::Forward,
            (false, true) => ChannelDirection::Reverse,
            (true, true) => ChannelDirection::Brake,
        }
    }

    const fn inputs(self) -> (bool, bool) {
        match self {
            ChannelDirection::Stop => (false, false),
            ChannelDirection::Forward => (true, false),
            ChannelDirection::Reverse => (false, true),
            ChannelDirection::Brake => (true, true),
        }
    }
}

/// One H-bridge channel: two direction inputs and a PWM enable
///
/// # Type Parameters
///
/// * `D` - Digital output type for 1A/2A
/// * `P` - PWM pin type for EN
pub struct HBridgeChannel<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    in1: D,
    in2: D,
    enable: P,
}

impl<D, P> HBridgeChannel<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    /// Create a channel from initialized pins
    pub fn new(in1: D, in2: D, enable: P) -> Self {
        Self { in1, in2, enable }
    }

    /// Drive the direction inputs
    ///
    /// The input going low is written first so both inputs are never high
    /// together on the way from Forward to Reverse.
    #[inline]
    pub fn set_direction(&mut self, direction: ChannelDirection) -> Result<(), MotorError> {
        let (in1, in2) = direction.inputs();
        if in1 {
            self.in2.set_level(in2)?;
            self.in1.set_level(in1)?;
        } else {
            self.in1.set_level(in1)?;
            self.in2.set_level(in2)?;
        }
        Ok(())
    }

    /// Set the enable duty cycle
    #[inline]
    pub fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        self.enable.set_duty(duty)
    }

    /// Pins, for inspection in tests
    pub fn pins(&self) -> (&D, &D, &P) {
        (&self.in1, &self.in2, &self.enable)
    }
}

/// Left and right H-bridge channels driven as one unit
pub struct DriveTrain<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    left: HBridgeChannel<D, P>,
    right: HBridgeChannel<D, P>,
    pattern: DirectionPattern,
    duty: f32,
}

impl<D, P> DriveTrain<D, P>
where
    D: DigitalOut,
    P: PwmPin,
{
    /// Create a drive train; call [`DriveTrain::de_energize`] before use to
    /// bring the pins to a known state
    pub fn new(left: HBridgeChannel<D, P>, right: HBridgeChannel<D, P>) -> Self {
        Self {
            left,
            right,
            pattern: DirectionPattern::STOP,
            duty: 0.0,
        }
    }

    /// Assert a direction pattern on both channels
    pub fn apply_pattern(&mut self, pattern: DirectionPattern) -> Result<(), MotorError> {
        // Record first: on a partial write the pins are closer to the
        // requested pattern than to the old one.
        self.pattern = pattern;
        self.left.set_direction(pattern.left())?;
        self.right.set_direction(pattern.right())?;
        Ok(())
    }

    /// Pull every direction input low
    #[inline]
    pub fn de_energize(&mut self) -> Result<(), MotorError> {
        self.apply_pattern(DirectionPattern::STOP)
    }

    /// Apply the same duty cycle to both enable inputs
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidDuty` if `duty` is outside [0.0, 1.0].
    pub fn set_duty(&mut self, duty: f32) -> Result<(), MotorError> {
        if !(0.0..=1.0).contains(&duty) {
            return Err(MotorError::InvalidDuty);
        }
        self.left.set_duty(duty)?;
        self.right.set_duty(duty)?;
        self.duty = duty;
        Ok(())
    }

    /// Last asserted direction pattern
    pub fn pattern(&self) -> DirectionPattern {
        self.pattern
    }

    /// Last applied duty cycle
    pub fn duty(&self) -> f32 {
        self.duty
    }

    /// Left channel
    pub fn left(&self) -> &HBridgeChannel<D, P> {
        &self.left
    }

    /// Right channel
    pub fn right(&self) -> &HBridgeChannel<D, P> {
        &self.right
    }
}
