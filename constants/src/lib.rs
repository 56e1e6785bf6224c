//! Compile-time tunables shared by the control layer.
//!
//! Runtime settings files fall back to these values for any field they omit.

pub mod camera;
pub mod input;
pub mod layers;
pub mod map;
pub mod movement;
