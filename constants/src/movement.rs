/// Travel speed of a moving entity (units/s).
pub const MOVER_LINEAR_SPEED: f32 = 5.0;
/// Distance to the destination at which an order counts as arrived.
pub const MOVER_ARRIVAL_RADIUS: f32 = 2.0;
/// Slerp rate used while turning to face the destination.
pub const MOVER_ANGULAR_SPEED: f32 = 5.0;

/// Angle (radians) under which the mover is considered to face its destination.
pub const MOVER_FACING_EPSILON: f32 = 1.0e-3;
