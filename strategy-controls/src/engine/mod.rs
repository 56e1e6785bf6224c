//! Engine side of the control layer: input sampling, the camera rig, map
//! bounds, settings loading, app wiring and the demo scene.

pub mod bounds;
pub mod camera;
pub mod core;
pub mod error;
pub mod input;
pub mod loading;
pub mod ray;
pub mod scene;
