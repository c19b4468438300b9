#![cfg_attr(not(test), no_std)]

//! ir_rover_firmware - Embassy firmware for the IR remote-controlled rover
//!
//! This crate binds the `ir_rover_core` pipeline to the RP2350 on the Embassy
//! runtime.
//!
//! # Design Principles
//!
//! - **Embassy tasks**: interrupt executors for edge capture, frame watchdog
//!   and emergency stop; thread mode for the control loop
//! - **Platform implementations**: GPIO, PWM and time behind traits, with
//!   host mocks
//! - **Host testable glue**: the control loop body and the IR link run on
//!   host against mock pins

// Platform abstraction layer
pub mod platform;

// Logging macros and Embassy trait implementations
pub mod core;

// Build-time parameters
pub mod parameters;

// IR link and motor driver adapters
pub mod libraries;

// Control loop body and emergency-stop handler
pub mod rover;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!)
// are exported at crate root via #[macro_export] in core::logging
