use bevy::prelude::*;
use constants::camera::*;
use serde::{Deserialize, Serialize};

use crate::engine::error::{ConfigError, ensure_non_negative, ensure_positive};

/// Tunables for the camera rig. Immutable while a tick runs; replaced wholesale on settings reload.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub damping: f32,
    pub step_size: f32,
    pub zoom_dampening: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub zoom_speed: f32,
    pub max_rotation_speed: f32,
    /// Fraction of the screen, 0..=0.1.
    pub edge_tolerance: f32,
    pub use_edge_scroll: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            max_speed: CAMERA_MAX_SPEED,
            acceleration: CAMERA_ACCELERATION,
            damping: CAMERA_DAMPING,
            step_size: CAMERA_ZOOM_STEP,
            zoom_dampening: CAMERA_ZOOM_DAMPENING,
            min_height: CAMERA_MIN_HEIGHT,
            max_height: CAMERA_MAX_HEIGHT,
            zoom_speed: CAMERA_ZOOM_SPEED,
            max_rotation_speed: CAMERA_MAX_ROTATION_SPEED,
            edge_tolerance: CAMERA_EDGE_TOLERANCE,
            use_edge_scroll: CAMERA_USE_EDGE_SCROLL,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("camera.max_speed", self.max_speed)?;
        ensure_non_negative("camera.acceleration", self.acceleration)?;
        ensure_non_negative("camera.damping", self.damping)?;
        ensure_non_negative("camera.step_size", self.step_size)?;
        ensure_non_negative("camera.zoom_dampening", self.zoom_dampening)?;
        ensure_non_negative("camera.zoom_speed", self.zoom_speed)?;
        ensure_non_negative("camera.max_rotation_speed", self.max_rotation_speed)?;
        ensure_positive("camera.min_height", self.min_height)?;

        if !(self.min_height <= self.max_height) {
            return Err(ConfigError::InvertedHeightRange {
                min: self.min_height,
                max: self.max_height,
            });
        }
        if !(0.0..=CAMERA_MAX_EDGE_TOLERANCE).contains(&self.edge_tolerance) {
            return Err(ConfigError::EdgeToleranceOutOfRange(self.edge_tolerance));
        }
        Ok(())
    }

    pub fn clamp_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height, self.max_height)
    }
}
