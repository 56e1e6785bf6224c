use bevy::asset::LoadState;
use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::bounds::MapBounds;
use crate::engine::camera::config::CameraConfig;
use crate::engine::error::ConfigError;
use crate::engine::loading::progress::LoadingProgress;
use crate::movement::config::MovementConfig;

pub const SETTINGS_PATH: &str = "settings/controls.json";

/// Every runtime tunable, as stored in the settings JSON. Missing fields keep their defaults.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    pub camera: CameraConfig,
    pub movement: MovementConfig,
    pub bounds: MapBounds,
}

impl ControlSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.movement.validate()?;
        self.bounds.validate()
    }

    /// Replace the live config resources with these values.
    pub fn apply(&self, commands: &mut Commands) {
        commands.insert_resource(self.camera.clone());
        commands.insert_resource(self.movement.clone());
        commands.insert_resource(self.bounds);
    }
}

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ControlSettings>>,
}

impl SettingsLoader {
    pub fn handle(&self) -> Option<&Handle<ControlSettings>> {
        self.handle.as_ref()
    }
}

pub fn start_loading(mut loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    info!("Loading control settings from {SETTINGS_PATH}");
    loader.handle = Some(asset_server.load(SETTINGS_PATH));
}

/// Apply the settings file once it loads. Invalid values abort startup;
/// a missing or unreadable file leaves the built-in defaults in place.
pub fn load_settings_system(
    mut progress: ResMut<LoadingProgress>,
    loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings: Res<Assets<ControlSettings>>,
    mut commands: Commands,
) -> Result<(), BevyError> {
    if progress.settings_resolved {
        return Ok(());
    }
    let Some(handle) = loader.handle() else {
        return Ok(());
    };

    if let Some(loaded) = settings.get(handle) {
        if let Err(err) = loaded.validate() {
            error!("Control settings in {SETTINGS_PATH} are invalid: {err}");
            return Err(err.into());
        }
        loaded.apply(&mut commands);
        progress.settings_resolved = true;
        info!("✓ Control settings applied");
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle.id()) {
        warn!("Control settings unavailable ({err}), using built-in defaults");
        progress.settings_resolved = true;
        progress.using_default_settings = true;
    }
    Ok(())
}

/// Re-apply settings edited on disk. Invalid edits are rejected and the current values kept.
pub fn reload_settings_on_change(
    mut events: EventReader<AssetEvent<ControlSettings>>,
    loader: Res<SettingsLoader>,
    settings: Res<Assets<ControlSettings>>,
    mut commands: Commands,
) {
    let Some(watched) = loader.handle().map(Handle::id) else {
        return;
    };

    for event in events.read() {
        let AssetEvent::Modified { id } = event else {
            continue;
        };
        if *id != watched {
            continue;
        }
        let Some(updated) = settings.get(*id) else {
            continue;
        };

        match updated.validate() {
            Ok(()) => {
                updated.apply(&mut commands);
                info!("Control settings reloaded");
            }
            Err(err) => error!("Rejected reloaded control settings: {err}; keeping previous values"),
        }
    }
}
