use bevy::prelude::*;

use crate::engine::ray::{ray_hits_obb, ray_sphere_hit_t};

/// Pickable volume of an entity, centred on its `GlobalTransform`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    Box { size: Vec3 },
}

impl PickShape {
    /// Distance along `ray` to this shape placed at `transform`.
    pub fn hit_distance(&self, ray: &Ray3d, transform: &GlobalTransform) -> Option<f32> {
        let direction = ray.direction.as_vec3();
        match *self {
            Self::Sphere { radius } => {
                let (scale, _, center) = transform.to_scale_rotation_translation();
                ray_sphere_hit_t(ray.origin, direction, center, radius * scale.max_element())
            }
            Self::Box { size } => ray_hits_obb(ray.origin, direction, transform, size),
        }
    }
}

/// Layer bits an entity answers pick queries on.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickLayers(pub u32);

impl PickLayers {
    pub fn intersects(&self, mask: u32) -> bool {
        self.0 & mask != 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub entity: Entity,
    pub distance: f32,
    pub point: Vec3,
}

/// Nearest target on `mask` hit by `ray`, if any.
pub fn cast_ray<'a>(
    ray: &Ray3d,
    mask: u32,
    targets: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a PickShape, &'a PickLayers)>,
) -> Option<PickHit> {
    targets
        .into_iter()
        .filter(|(_, _, _, layers)| layers.intersects(mask))
        .filter_map(|(entity, transform, shape, _)| {
            shape
                .hit_distance(ray, transform)
                .map(|distance| PickHit {
                    entity,
                    distance,
                    point: ray.get_point(distance),
                })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::layers::{LAYER_PLANET, LAYER_SHIP};

    fn down_ray(x: f32) -> Ray3d {
        Ray3d::new(Vec3::new(x, 50.0, 0.0), Dir3::NEG_Y)
    }

    fn target(
        index: u32,
        position: Vec3,
        shape: PickShape,
        layers: u32,
    ) -> (Entity, GlobalTransform, PickShape, PickLayers) {
        (
            Entity::from_raw(index),
            GlobalTransform::from_translation(position),
            shape,
            PickLayers(layers),
        )
    }

    fn cast(ray: &Ray3d, mask: u32, targets: &[(Entity, GlobalTransform, PickShape, PickLayers)]) -> Option<PickHit> {
        cast_ray(ray, mask, targets.iter().map(|(e, t, s, l)| (*e, t, s, l)))
    }

    #[test]
    fn nearest_hit_wins() {
        let targets = [
            target(1, Vec3::ZERO, PickShape::Sphere { radius: 1.0 }, LAYER_PLANET),
            target(2, Vec3::new(0.0, 10.0, 0.0), PickShape::Sphere { radius: 1.0 }, LAYER_PLANET),
        ];
        let hit = cast(&down_ray(0.0), LAYER_PLANET, &targets);
        assert_eq!(hit.map(|h| h.entity), Some(Entity::from_raw(2)));
        assert!(hit.is_some_and(|h| (h.point.y - 11.0).abs() < 1e-4));
    }

    #[test]
    fn mask_filters_out_other_layers() {
        let targets = [
            target(1, Vec3::ZERO, PickShape::Sphere { radius: 1.0 }, LAYER_PLANET),
            target(2, Vec3::new(0.0, 10.0, 0.0), PickShape::Box { size: Vec3::splat(2.0) }, LAYER_SHIP),
        ];
        let hit = cast(&down_ray(0.0), LAYER_PLANET, &targets);
        assert_eq!(hit.map(|h| h.entity), Some(Entity::from_raw(1)));
    }

    #[test]
    fn miss_returns_none() {
        let targets = [target(1, Vec3::ZERO, PickShape::Sphere { radius: 1.0 }, LAYER_PLANET)];
        assert!(cast(&down_ray(5.0), LAYER_PLANET, &targets).is_none());
    }

    #[test]
    fn scaled_sphere_grows_with_its_transform() {
        let targets = [(
            Entity::from_raw(1),
            GlobalTransform::from(Transform::from_scale(Vec3::splat(3.0))),
            PickShape::Sphere { radius: 1.0 },
            PickLayers(LAYER_PLANET),
        )];
        assert!(cast(&down_ray(2.5), LAYER_PLANET, &targets).is_some());
    }
}
