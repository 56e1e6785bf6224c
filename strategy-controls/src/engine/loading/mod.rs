//! Settings loading for the control layer.
//!
//! The JSON settings asset is requested at startup and applied before the app
//! leaves `Loading`. With the `hot-reload` feature, edits on disk are applied
//! while running.

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// `ControlSettings` asset, startup application and hot reload.
pub mod settings_loader;
