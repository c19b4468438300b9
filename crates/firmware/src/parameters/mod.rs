//! Firmware parameters
//!
//! Receiver and drive parameters are fixed at build time. See [`board`] for
//! the environment variables the build script bakes in.

pub mod board;

pub use board::{BoardParams, BuildOverrides};
