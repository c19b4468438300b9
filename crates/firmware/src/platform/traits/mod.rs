//! Platform abstraction traits
//!
//! Each trait covers one peripheral the rover drives. The firmware's core
//! adapters (`libraries::motor_driver`) bridge them to the core crate's
//! `DigitalOut` and `PwmPin`.

pub mod gpio;
pub mod pwm;

pub use gpio::GpioInterface;
pub use pwm::PwmInterface;
