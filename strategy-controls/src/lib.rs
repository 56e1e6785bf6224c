//! Real-time controls for a 3D strategy view: a bounded pan/rotate/zoom
//! camera rig and point-and-click movement for selected entities.

pub mod engine;
pub mod movement;

pub use engine::core::app_setup::create_app;
