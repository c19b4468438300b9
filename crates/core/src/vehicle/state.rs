//! Vehicle state owned by the control loop

use core::fmt::Write;

use heapless::String;

use super::command::Action;
use crate::motor::DirectionPattern;
use crate::parameters::DriveParams;

/// Bounded speed level with saturating steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedLevel {
    value: u8,
    min: u8,
    max: u8,
    step: u8,
}

impl SpeedLevel {
    /// Create a level at `initial`, clamped into `[min, max]`
    pub fn new(initial: u8, min: u8, max: u8, step: u8) -> Self {
        Self {
            value: initial.clamp(min, max.max(min)),
            min,
            max: max.max(min),
            step,
        }
    }

    pub fn from_params(params: &DriveParams) -> Self {
        Self::new(
            params.initial_speed,
            params.speed_min,
            params.speed_max,
            params.speed_step,
        )
    }

    /// Step up, stopping at the maximum. Returns true if the level changed.
    pub fn increase(&mut self) -> bool {
        let next = self.value.saturating_add(self.step).min(self.max);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Step down, stopping at the minimum. Returns true if the level changed.
    pub fn decrease(&mut self) -> bool {
        let next = self.value.saturating_sub(self.step).max(self.min);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Level as a PWM duty cycle, `max` mapping to 1.0
    pub fn duty(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        f32::from(self.value) / f32::from(self.max)
    }
}

/// Mutable vehicle state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Last dispatched action, `None` until the first frame
    pub action: Option<Action>,
    /// Direction pattern currently commanded
    pub motion: DirectionPattern,
    pub speed: SpeedLevel,
    pub accessory_on: bool,
    /// Indicator LED parity, flipped on every decoded frame
    pub indicator_parity: bool,
    /// Frames handled since boot
    pub frames: u32,
}

impl VehicleState {
    pub fn new(params: &DriveParams) -> Self {
        Self {
            action: None,
            motion: DirectionPattern::STOP,
            speed: SpeedLevel::from_params(params),
            accessory_on: false,
            indicator_parity: false,
            frames: 0,
        }
    }

    /// Snapshot for the display collaborator
    pub fn report(&self) -> StatusReport {
        StatusReport {
            action: self.action,
            speed: self.speed.value(),
            accessory_on: self.accessory_on,
        }
    }
}

/// Status published after every dispatched action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub action: Option<Action>,
    pub speed: u8,
    pub accessory_on: bool,
}

impl StatusReport {
    /// Status text; "Waiting" before the first frame
    pub fn label(&self) -> &'static str {
        self.action.map_or("Waiting", Action::label)
    }

    /// One display line, e.g. `Forward 50% lights`
    pub fn status_line(&self) -> String<32> {
        let mut line = String::new();
        // Longest line is 21 bytes, the write cannot overflow
        let _ = write!(line, "{} {}%", self.label(), self.speed);
        if self.accessory_on {
            let _ = line.push_str(" lights");
        }
        line
    }
}
