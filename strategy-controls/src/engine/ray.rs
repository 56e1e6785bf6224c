//! Ray intersection helpers for pointer picking and drag panning.

use bevy::prelude::*;

/// Rays closer to parallel with the ground than this never hit it.
const PARALLEL_EPSILON: f32 = 1.0e-3;

/// Intersect a ray with the horizontal plane at `plane_y`. Hits behind the origin are misses.
pub fn ground_intersection(ray: &Ray3d, plane_y: f32) -> Option<Vec3> {
    let direction = ray.direction.as_vec3();
    if direction.y.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (plane_y - ray.origin.y) / direction.y;
    (t > 0.0).then(|| ray.origin + direction * t)
}

/// Distance along the ray to the first surface of a sphere, if any lies ahead.
pub fn ray_sphere_hit_t(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let b = to_origin.dot(dir);
    let c = to_origin.length_squared() - radius * radius;
    let a = dir.length_squared();
    let discriminant = b * b - a * c;
    if discriminant < 0.0 || a == 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let near = (-b - root) / a;
    let far = (-b + root) / a;
    if far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Ray against a box of `size` centred on `xf`, tested in the box's local space.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, size: Vec3) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let half = size * 0.5;
    ray_aabb_hit_t(
        inv.transform_point3(origin),
        inv.transform_vector3(dir),
        -half,
        half,
    )
}

// Slab method, returns the entry distance (or exit distance when starting inside).
pub fn ray_aabb_hit_t(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        if dir[axis] == 0.0 {
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let (mut t0, mut t1) = ((min[axis] - origin[axis]) * inv, (max[axis] - origin[axis]) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::new(direction).unwrap())
    }

    #[test]
    fn downward_ray_hits_ground_below_origin() {
        let hit = ground_intersection(&ray(Vec3::new(2.0, 10.0, 3.0), Vec3::NEG_Y), 0.0);
        assert_eq!(hit, Some(Vec3::new(2.0, 0.0, 3.0)));
    }

    #[test]
    fn upward_or_flat_rays_miss_the_ground() {
        assert!(ground_intersection(&ray(Vec3::Y, Vec3::Y), 0.0).is_none());
        assert!(ground_intersection(&ray(Vec3::Y, Vec3::X), 0.0).is_none());
    }

    #[test]
    fn sphere_hit_reports_near_surface() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert!((t.unwrap() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_behind_origin_is_a_miss() {
        let t = ray_sphere_hit_t(Vec3::new(0.0, 0.0, 10.0), Vec3::Z, Vec3::ZERO, 2.0);
        assert!(t.is_none());
    }

    #[test]
    fn obb_respects_rotation() {
        let xf = GlobalTransform::from(
            Transform::from_xyz(5.0, 0.0, 0.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_4)),
        );
        let t = ray_hits_obb(Vec3::new(5.0, 10.0, 0.0), Vec3::NEG_Y, &xf, Vec3::splat(2.0));
        assert!((t.unwrap() - 9.0).abs() < 1e-4);

        let miss = ray_hits_obb(Vec3::new(7.0, 10.0, 0.0), Vec3::NEG_Y, &xf, Vec3::splat(2.0));
        assert!(miss.is_none());
    }
}
