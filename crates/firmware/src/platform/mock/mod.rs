//! Mock platform implementation for host tests

mod gpio;
mod pwm;

pub use gpio::MockGpio;
pub use pwm::MockPwm;
