//! Map boundary limits for the playable area (35 x 35 world units, centred on the origin).

pub const MAP_MIN_X: f32 = -17.5;
pub const MAP_MAX_X: f32 = 17.5;
pub const MAP_MIN_Z: f32 = -17.5;
pub const MAP_MAX_Z: f32 = 17.5;

/// Edge length of the ground plane spawned for the playable area.
pub const MAP_SIZE: f32 = MAP_MAX_X - MAP_MIN_X;
