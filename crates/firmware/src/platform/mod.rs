//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the rover's peripherals.
//! All platform-specific code is isolated here.

pub mod error;
pub mod traits;

#[cfg(feature = "embassy")]
pub mod time;

#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(test)]
pub mod mock;

// Re-export commonly used types
pub use error::{GpioError, PlatformError, PwmError, Result};
#[cfg(feature = "embassy")]
pub use time::EmbassyTime;
pub use traits::{GpioInterface, PwmInterface};
