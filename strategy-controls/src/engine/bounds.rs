use bevy::prelude::*;
use constants::map::{MAP_MAX_X, MAP_MAX_Z, MAP_MIN_X, MAP_MIN_Z};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Playable area limits on the ground plane.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for MapBounds {
    fn default() -> Self {
        Self {
            min_x: MAP_MIN_X,
            max_x: MAP_MAX_X,
            min_z: MAP_MIN_Z,
            max_z: MAP_MAX_Z,
        }
    }
}

impl MapBounds {
    /// Clamp a rig base position into the playable area. The result always sits on the ground.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min_x, self.max_x),
            0.0,
            position.z.clamp(self.min_z, self.max_z),
        )
    }

    pub fn contains(&self, position: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_z..=self.max_z).contains(&position.z)
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) * 0.5,
            0.0,
            (self.min_z + self.max_z) * 0.5,
        )
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.max_x - self.min_x, self.max_z - self.min_z)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // f32::clamp panics when min > max.
        if !(self.min_x <= self.max_x) {
            return Err(ConfigError::InvertedBounds {
                axis: 'x',
                min: self.min_x,
                max: self.max_x,
            });
        }
        if !(self.min_z <= self.max_z) {
            return Err(ConfigError::InvertedBounds {
                axis: 'z',
                min: self.min_z,
                max: self.max_z,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_inside_points_and_drops_height() {
        let bounds = MapBounds::default();
        let clamped = bounds.clamp(Vec3::new(3.0, 7.0, -4.0));
        assert_eq!(clamped, Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn clamp_pulls_outside_points_onto_the_edge() {
        let bounds = MapBounds::default();
        let clamped = bounds.clamp(Vec3::new(100.0, -2.0, -100.0));
        assert_eq!(clamped, Vec3::new(MAP_MAX_X, 0.0, MAP_MIN_Z));
        assert!(bounds.contains(clamped));
    }

    #[test]
    fn default_area_is_thirty_five_square() {
        let bounds = MapBounds::default();
        assert_eq!(bounds.size(), Vec2::splat(constants::map::MAP_SIZE));
        assert_eq!(bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let bounds = MapBounds {
            min_z: 4.0,
            max_z: -4.0,
            ..default()
        };
        assert_eq!(
            bounds.validate(),
            Err(ConfigError::InvertedBounds {
                axis: 'z',
                min: 4.0,
                max: -4.0
            })
        );
    }
}
