//! Demo scene and debug visualisation.

/// Debug gizmo overlay: map outline, mover paths, arrival rings and pointer marker.
pub mod gizmos;

/// Demo scene: lighting, ground, orbiting planets, a selected ship and the camera rig.
pub mod setup;
