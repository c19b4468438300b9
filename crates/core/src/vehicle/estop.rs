//! Emergency stop
//!
//! Tripping bumps a generation counter and then de-energizes the drive
//! train. An actuation in flight compares the generation it started with
//! against the current one inside the same critical section that would
//! energize the outputs, so a trip at any point during a dispatch leaves
//! the motors de-energized.

use core::sync::atomic::{AtomicU32, Ordering};

use super::actuator::VehicleOutputs;
use crate::motor::{DigitalOut, MotorError, PwmPin};
use crate::traits::SharedState;

/// Trip counter shared between the e-stop context and the actuator
#[derive(Debug, Default)]
pub struct EmergencyStop {
    generation: AtomicU32,
}

impl EmergencyStop {
    pub const fn new() -> Self {
        Self {
            generation: AtomicU32::new(0),
        }
    }

    /// Record a trip and return the new generation
    pub fn trip(&self) -> u32 {
        self.generation
            .fetch_add(1, Ordering::AcqRel)
            .wrapping_add(1)
    }

    /// Current generation
    pub fn generation(&self) -> u32 {
        self.generation.load(Ordering::Acquire)
    }

    /// True if a trip happened after `generation` was read
    pub fn tripped_since(&self, generation: u32) -> bool {
        self.generation() != generation
    }

    /// Record a trip and de-energize every motor output
    ///
    /// Frame capture and vehicle state are left alone.
    pub fn trip_and_stop<S, D, P>(&self, outputs: &S) -> Result<u32, MotorError>
    where
        S: SharedState<VehicleOutputs<D, P>>,
        D: DigitalOut,
        P: PwmPin,
    {
        let generation = self.trip();
        outputs.with_mut(|o| o.de_energize())?;
        Ok(generation)
    }
}
