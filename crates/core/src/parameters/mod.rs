//! Receiver and drive configuration
//!
//! This module provides the tunable constants of the IR pipeline and the
//! drive train. Defaults reproduce the original rover; the firmware crate can
//! override them at build time (see `ir_rover_firmware::parameters`).
//! Nothing here is persisted.

pub mod drive;
pub mod error;
pub mod ir;

pub use drive::DriveParams;
pub use error::ParameterError;
pub use ir::IrParams;
