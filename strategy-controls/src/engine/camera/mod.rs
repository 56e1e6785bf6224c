//! Strategy camera rig: a ground-level base that pans, yaws and clamps to the
//! map, carrying a child camera that dollies in and out while looking at it.
//!
//! The per-frame pipeline lives in [`rig::CameraRig::tick`]; the systems in
//! [`controller`] only gather the ECS data it needs.

/// Camera tunables loaded from the settings asset.
pub mod config;

/// ECS systems that feed input into camera rigs and validate their wiring.
pub mod controller;

/// Rig component, motion state and the pure per-frame pipeline.
pub mod rig;

use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, ControlSet};
use controller::{camera_rig_controller, validate_rig_wiring};

pub use config::CameraConfig;
pub use rig::{CameraRig, RigCamera};

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Running), validate_rig_wiring)
            .add_systems(
                Update,
                camera_rig_controller
                    .in_set(ControlSet::Camera)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
