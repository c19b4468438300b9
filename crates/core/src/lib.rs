//! ir_rover_core - Pure no_std logic for the IR remote-controlled rover
//!
//! This crate contains the IR frame acquisition/decoding pipeline and the
//! drive state machine it feeds. Everything here is platform-agnostic and
//! can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Pins, time and shared state injected via traits
//!
//! # Pipeline
//!
//! ```text
//! edge ──► EdgeTimer ──► FrameBuffer ──(34 samples)──► decode ──► CommandTable
//!             ▲               ▲                                       │
//!             │        FrameWatchdog (abort)                          ▼
//!             │                                       VehicleController ──► actuate
//!       (interrupt side)                               (control loop)       ▲
//!                                                                  EmergencyStop
//! ```
//!
//! # Modules
//!
//! - [`ir`]: Edge timer, frame capture buffer, frame watchdog, bit decoder
//! - [`vehicle`]: Command dispatch, vehicle state, actuation, emergency stop
//! - [`motor`]: H-bridge drive train, accessory and indicator outputs
//! - [`parameters`]: Receiver and drive configuration
//! - [`traits`]: Platform-agnostic trait abstractions (TimeSource, SharedState)

#![no_std]

pub mod ir;
pub mod motor;
pub mod parameters;
pub mod traits;
pub mod vehicle;
