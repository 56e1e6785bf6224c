use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::engine::bounds::MapBounds;
use crate::engine::camera::rig::RigCamera;
use crate::engine::input::sampler::InputFrame;
use crate::engine::ray::ground_intersection;
use crate::movement::MovementActuator;

const BOUNDS_COLOR: Color = Color::srgb(0.4, 0.4, 0.5);
const PATH_COLOR: Color = Color::srgb(0.2, 0.9, 0.4);
const ARRIVAL_COLOR: Color = Color::srgb(0.9, 0.8, 0.2);
const POINTER_COLOR: Color = Color::srgb(0.9, 0.3, 0.3);

#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub enabled: bool,
}

pub fn toggle_debug_overlay(input: Res<InputFrame>, mut overlay: ResMut<DebugOverlay>) {
    if input.overlay_toggled {
        overlay.enabled = !overlay.enabled;
        info!(
            "Debug overlay {}",
            if overlay.enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Rotation laying XY-plane gizmo primitives flat on the ground.
fn flat(position: Vec3) -> Isometry3d {
    Isometry3d::new(position, Quat::from_rotation_x(FRAC_PI_2))
}

pub fn draw_debug_overlay(
    overlay: Res<DebugOverlay>,
    input: Res<InputFrame>,
    bounds: Res<MapBounds>,
    mut gizmos: Gizmos,
    movers: Query<(&Transform, &MovementActuator)>,
    destinations: Query<&GlobalTransform>,
    cameras: Query<(&Camera, &GlobalTransform), With<RigCamera>>,
) {
    if !overlay.enabled {
        return;
    }

    gizmos.rect(flat(bounds.center()), bounds.size(), BOUNDS_COLOR);

    for (transform, actuator) in &movers {
        let Some(order) = actuator.order() else {
            continue;
        };
        let Ok(destination) = destinations.get(order.destination) else {
            continue;
        };
        let target = destination.translation();
        gizmos.line(transform.translation, target, PATH_COLOR);
        gizmos.circle(flat(target), order.arrival_radius, ARRIVAL_COLOR);
    }

    let Some(pointer) = input.pointer else {
        return;
    };
    let hit = cameras.iter().find_map(|(camera, camera_transform)| {
        let ray = camera.viewport_to_world(camera_transform, pointer).ok()?;
        ground_intersection(&ray, 0.0)
    });
    if let Some(point) = hit {
        gizmos.circle(flat(point), 0.3, POINTER_COLOR);
    }
}
