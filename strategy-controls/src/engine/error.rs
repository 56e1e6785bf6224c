use bevy::prelude::Entity;
use thiserror::Error;

/// Tunables rejected by settings validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("camera height range is inverted: min {min} > max {max}")]
    InvertedHeightRange { min: f32, max: f32 },

    #[error("edge tolerance {0} is outside 0..={max}", max = constants::camera::CAMERA_MAX_EDGE_TOLERANCE)]
    EdgeToleranceOutOfRange(f32),

    #[error("map bounds are inverted on the {axis} axis: {min} > {max}")]
    InvertedBounds { axis: char, min: f32, max: f32 },

    #[error("destination pick mask selects no layers")]
    EmptyPickMask,
}

/// Wiring faults found when the control systems start.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("camera rig {rig} points at child camera {camera}, which does not exist")]
    MissingRigCamera { rig: Entity, camera: Entity },

    #[error("child camera {camera} of rig {rig} has no Camera component")]
    RigCameraWithoutCamera { rig: Entity, camera: Entity },
}

pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
