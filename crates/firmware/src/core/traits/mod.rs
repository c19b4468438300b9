//! Core traits and their firmware implementations
//!
//! ```text
//!            ir_rover_core::traits
//!   TimeSource               SharedState<T>
//!        │                        │
//!   ┌────┴─────┐            ┌─────┴────────┐
//!   ▼          ▼            ▼              ▼
//! EmbassyTime MockTime  EmbassyState<T>  MockState<T>
//! (platform)  (core)    (this module)    (core)
//! ```

pub mod sync;

pub use ir_rover_core::traits::{MockState, MockTime, SharedState, TimeSource};
pub use sync::EmbassyState;
