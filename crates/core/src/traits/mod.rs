//! Core traits for platform-agnostic rover functionality.
//!
//! This module provides trait abstractions that decouple the IR pipeline and
//! drive logic from platform-specific implementations (Embassy, etc.).
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (`EmbassyTime`, `EmbassyState<T>`) live in the
//!   firmware crate

pub mod sync;
pub mod time;

pub use sync::{MockState, SharedState};
pub use time::{MockTime, TimeSource};
