use bevy::asset::AssetMetaCheck;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::bounds::MapBounds;
use crate::engine::camera::{CameraConfig, CameraRigPlugin};
use crate::engine::core::app_state::{AppState, ControlSet, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::input::sampler::{InputBindings, InputFrame, sample_input};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::settings_loader::{
    ControlSettings, SettingsLoader, load_settings_system, reload_settings_on_change,
    start_loading,
};
use crate::engine::scene::gizmos::{DebugOverlay, draw_debug_overlay, toggle_debug_overlay};
use crate::engine::scene::setup::{orbit_planets, setup_scene};
use crate::movement::{MovementConfig, MovementPlugin};

const LOG_FILTER: &str = "wgpu=error,naga=warn,strategy_controls=debug";

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers ControlSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ControlSettings>::new(&["json"]));

    // Built-in defaults stand until the settings file is applied.
    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<CameraConfig>()
        .init_resource::<MovementConfig>()
        .init_resource::<MapBounds>()
        .init_resource::<InputFrame>()
        .init_resource::<InputBindings>()
        .init_resource::<DebugOverlay>();

    app.configure_sets(
        Update,
        (
            ControlSet::Sample,
            ControlSet::Camera,
            ControlSet::Movement,
            ControlSet::Overlay,
        )
            .chain(),
    );

    app.add_plugins(CameraRigPlugin).add_plugins(MovementPlugin);

    app.add_systems(Startup, (setup_scene, start_loading).chain())
        .add_systems(
            Update,
            (load_settings_system, transition_to_running)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            sample_input
                .in_set(ControlSet::Sample)
                .run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (reload_settings_on_change, orbit_planets).run_if(in_state(AppState::Running)),
        )
        .add_systems(
            Update,
            (toggle_debug_overlay, draw_debug_overlay)
                .chain()
                .in_set(ControlSet::Overlay)
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
