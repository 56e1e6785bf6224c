use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Per-frame ordering of the control layer: sample input, then drive the
/// camera, then movement, then draw the debug overlay.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlSet {
    Sample,
    Camera,
    Movement,
    Overlay,
}

pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.settings_resolved {
        info!("→ Settings resolved, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
