//! Firmware-side core infrastructure
//!
//! Logging macros and the Embassy implementations of the core crate's
//! traits. Pure logic stays in `ir_rover_core`.

pub mod logging;
pub mod traits;

// Re-export pure modules so firmware code can use crate::core::X
pub use ir_rover_core::ir;
pub use ir_rover_core::motor;
pub use ir_rover_core::vehicle;
