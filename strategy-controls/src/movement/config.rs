use bevy::prelude::*;
use constants::layers::DESTINATION_PICK_MASK;
use constants::movement::{MOVER_ANGULAR_SPEED, MOVER_ARRIVAL_RADIUS, MOVER_LINEAR_SPEED};
use serde::{Deserialize, Serialize};

use crate::engine::error::{ConfigError, ensure_non_negative, ensure_positive};

/// Parameters stamped onto every new movement order.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub linear_speed: f32,
    pub arrival_radius: f32,
    pub angular_speed: f32,
    /// Layer bits a destination click may land on.
    pub pick_mask: u32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            linear_speed: MOVER_LINEAR_SPEED,
            arrival_radius: MOVER_ARRIVAL_RADIUS,
            angular_speed: MOVER_ANGULAR_SPEED,
            pick_mask: DESTINATION_PICK_MASK,
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("movement.linear_speed", self.linear_speed)?;
        ensure_positive("movement.angular_speed", self.angular_speed)?;
        ensure_non_negative("movement.arrival_radius", self.arrival_radius)?;
        if self.pick_mask == 0 {
            return Err(ConfigError::EmptyPickMask);
        }
        Ok(())
    }
}
