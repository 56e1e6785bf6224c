//! Pick layer bits used to filter pointer ray casts.

pub const LAYER_TERRAIN: u32 = 1 << 0;
pub const LAYER_PLANET: u32 = 1 << 1;
pub const LAYER_SHIP: u32 = 1 << 2;

/// Layers a destination pick is allowed to hit.
pub const DESTINATION_PICK_MASK: u32 = LAYER_PLANET;
