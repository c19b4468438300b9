//! Firmware libraries
//!
//! - [`motor_driver`]: platform pins behind the core output traits
//! - [`ir_link`]: interrupt-side IR receiver state and the frame hand-off

pub mod ir_link;
pub mod motor_driver;

pub use ir_link::{EdgeEvent, IrLink, LinkStats, IR_LINK};
pub use motor_driver::{OutputPin, PwmChannel};
