//! Build-time board parameters
//!
//! `build.rs` copies these environment variables into the crate with
//! `cargo:rustc-env`; unset variables become empty strings and keep their
//! defaults:
//!
//! | Variable              | Field                           | Default |
//! |-----------------------|---------------------------------|---------|
//! | `IR_LOGICAL_ONE_US`   | `ir.logical_one_threshold`      | 1750    |
//! | `IR_FRAME_TIMEOUT_US` | `ir.frame_timeout`              | 8192    |
//! | `DRIVE_SPEED_STEP`    | `drive.speed_step`              | 10      |
//! | `DRIVE_SPEED_MAX`     | `drive.speed_max`               | 100     |
//! | `DRIVE_INITIAL_SPEED` | `drive.initial_speed`           | 100     |
//! | `DRIVE_SETTLE_MS`     | `drive.settle_ms`               | 20      |
//!
//! The edge timer runs at 1 MHz, so IR values are both microseconds and
//! ticks.

use core::str::FromStr;

use ir_rover_core::parameters::{DriveParams, IrParams, ParameterError};

/// Raw override strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOverrides {
    pub logical_one_us: &'static str,
    pub frame_timeout_us: &'static str,
    pub speed_step: &'static str,
    pub speed_max: &'static str,
    pub initial_speed: &'static str,
    pub settle_ms: &'static str,
}

impl BuildOverrides {
    /// Values baked in by `build.rs`
    pub const fn from_env() -> Self {
        Self {
            logical_one_us: env!("IR_LOGICAL_ONE_US"),
            frame_timeout_us: env!("IR_FRAME_TIMEOUT_US"),
            speed_step: env!("DRIVE_SPEED_STEP"),
            speed_max: env!("DRIVE_SPEED_MAX"),
            initial_speed: env!("DRIVE_INITIAL_SPEED"),
            settle_ms: env!("DRIVE_SETTLE_MS"),
        }
    }
}

/// All tunables of the rover
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoardParams {
    pub ir: IrParams,
    pub drive: DriveParams,
}

impl BoardParams {
    /// Parameters from the build environment
    ///
    /// Falls back to the defaults, with a warning, if the overrides do not
    /// form a valid configuration.
    pub fn from_build_env() -> Self {
        match Self::from_overrides(&BuildOverrides::from_env()) {
            Ok(params) => params,
            Err(ParameterError::InvalidConfig { name }) => {
                crate::log_warn!("Invalid build parameter {}, using defaults", name);
                Self::default()
            }
        }
    }

    /// Apply overrides on top of the defaults and validate the result
    ///
    /// Empty strings keep the default. A value that does not parse keeps the
    /// default and logs a warning.
    pub fn from_overrides(overrides: &BuildOverrides) -> Result<Self, ParameterError> {
        let mut ir = IrParams::default();
        let mut drive = DriveParams::default();

        override_field(
            "IR_LOGICAL_ONE_US",
            overrides.logical_one_us,
            &mut ir.logical_one_threshold,
        );
        override_field(
            "IR_FRAME_TIMEOUT_US",
            overrides.frame_timeout_us,
            &mut ir.frame_timeout,
        );
        override_field(
            "DRIVE_SPEED_STEP",
            overrides.speed_step,
            &mut drive.speed_step,
        );
        override_field("DRIVE_SPEED_MAX", overrides.speed_max, &mut drive.speed_max);
        override_field(
            "DRIVE_INITIAL_SPEED",
            overrides.initial_speed,
            &mut drive.initial_speed,
        );
        override_field("DRIVE_SETTLE_MS", overrides.settle_ms, &mut drive.settle_ms);

        ir.validate()?;
        drive.validate()?;
        Ok(Self { ir, drive })
    }
}

fn override_field<T: FromStr>(name: &str, raw: &str, field: &mut T) {
    let raw = raw.trim();
    if raw.is_empty() {
        return;
    }
    match raw.parse() {
        Ok(value) => *field = value,
        Err(_) => crate::log_warn!("Ignoring unparsable {}={}", name, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_give_defaults() {
        let params = BoardParams::from_overrides(&BuildOverrides::default()).unwrap();
        assert_eq!(params, BoardParams::default());
        assert_eq!(params.ir.logical_one_threshold, 1_750);
        assert_eq!(params.drive.settle_ms, 20);
    }

    #[test]
    fn overrides_are_applied() {
        let overrides = BuildOverrides {
            logical_one_us: "1600",
            speed_step: " 25 ",
            settle_ms: "5",
            ..BuildOverrides::default()
        };
        let params = BoardParams::from_overrides(&overrides).unwrap();
        assert_eq!(params.ir.logical_one_threshold, 1_600);
        assert_eq!(params.drive.speed_step, 25);
        assert_eq!(params.drive.settle_ms, 5);
        assert_eq!(params.drive.speed_max, 100);
    }

    #[test]
    fn unparsable_value_keeps_default() {
        let overrides = BuildOverrides {
            speed_max: "fast",
            ..BuildOverrides::default()
        };
        let params = BoardParams::from_overrides(&overrides).unwrap();
        assert_eq!(params.drive.speed_max, 100);
    }

    #[test]
    fn inconsistent_overrides_are_rejected() {
        let overrides = BuildOverrides {
            speed_step: "0",
            ..BuildOverrides::default()
        };
        assert_eq!(
            BoardParams::from_overrides(&overrides),
            Err(ParameterError::InvalidConfig {
                name: "DRIVE_SPEED_STEP"
            })
        );

        let overrides = BuildOverrides {
            frame_timeout_us: "1000",
            ..BuildOverrides::default()
        };
        assert!(BoardParams::from_overrides(&overrides).is_err());
    }

    #[test]
    fn build_env_always_yields_valid_params() {
        let params = BoardParams::from_build_env();
        assert!(params.ir.validate().is_ok());
        assert!(params.drive.validate().is_ok());
    }
}
