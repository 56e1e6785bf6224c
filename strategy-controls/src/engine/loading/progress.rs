use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    /// Settings were applied from file, or the file failed and defaults stand.
    pub settings_resolved: bool,
    pub using_default_settings: bool,
}
