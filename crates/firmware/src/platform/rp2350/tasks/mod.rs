//! RP2350 Platform Embassy Tasks
//!
//! These tasks use `#[embassy_executor::task]` and require the `pico2_w`
//! feature.
//!
//! ## Available Tasks
//!
//! | Task                   | Executor                | Priority |
//! |------------------------|-------------------------|----------|
//! | `emergency_stop_task`  | interrupt (SWI_IRQ_2)   | highest  |
//! | `edge_capture_task`    | interrupt (SWI_IRQ_1)   | high     |
//! | `frame_watchdog_task`  | interrupt (SWI_IRQ_1)   | high     |
//! | `control_loop_task`    | thread mode             | lowest   |

pub mod control;
pub mod estop;
pub mod ir;

pub use control::control_loop_task;
pub use estop::emergency_stop_task;
pub use ir::{edge_capture_task, frame_watchdog_task};
