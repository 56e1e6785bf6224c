/// Top speed of the camera base while a displacement is requested (units/s).
pub const CAMERA_MAX_SPEED: f32 = 5.0;
/// Rate at which the base speed ramps toward `CAMERA_MAX_SPEED`.
pub const CAMERA_ACCELERATION: f32 = 10.0;
/// Rate at which leftover velocity decays once input stops.
pub const CAMERA_DAMPING: f32 = 15.0;

/// Zoom height change per normalized scroll step.
pub const CAMERA_ZOOM_STEP: f32 = 2.0;
/// Smoothing rate of the child camera offset toward its zoom target.
pub const CAMERA_ZOOM_DAMPENING: f32 = 7.5;
pub const CAMERA_MIN_HEIGHT: f32 = 5.0;
pub const CAMERA_MAX_HEIGHT: f32 = 50.0;
/// Forward push applied per unit of zoom height change (dolly effect).
pub const CAMERA_ZOOM_SPEED: f32 = 2.0;

/// Yaw degrees per pixel of horizontal pointer travel while rotating.
pub const CAMERA_MAX_ROTATION_SPEED: f32 = 1.0;

/// Fraction of the screen treated as the scrolling edge band.
pub const CAMERA_EDGE_TOLERANCE: f32 = 0.05;
pub const CAMERA_MAX_EDGE_TOLERANCE: f32 = 0.1;
pub const CAMERA_USE_EDGE_SCROLL: bool = true;

/// Initial local offset of the child camera relative to the rig base.
pub const CAMERA_INITIAL_OFFSET: [f32; 3] = [0.0, 20.0, 40.0];
