/// Squared magnitude a displacement must exceed to count as input.
pub const DISPLACEMENT_DEADZONE_SQ: f32 = 0.1;

/// Scroll units reported for one wheel notch.
pub const SCROLL_UNITS_PER_NOTCH: f32 = 120.0;
/// Divisor applied to raw scroll before the zoom deadzone test.
pub const SCROLL_NORMALIZER: f32 = 100.0;
/// Normalized scroll magnitude that must be exceeded to zoom.
pub const SCROLL_DEADZONE: f32 = 0.1;
