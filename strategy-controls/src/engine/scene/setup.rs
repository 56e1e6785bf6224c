use std::f32::consts::{FRAC_PI_4, TAU};

use bevy::prelude::*;
use constants::layers::{LAYER_PLANET, LAYER_SHIP, LAYER_TERRAIN};

use crate::engine::bounds::MapBounds;
use crate::engine::camera::config::CameraConfig;
use crate::engine::camera::controller::spawn_camera_rig;
use crate::movement::MovementActuator;
use crate::movement::orders::Selected;
use crate::movement::picking::{PickLayers, PickShape};

/// Circular path around `center` on the ground plane.
#[derive(Component, Debug, Clone, Copy)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per second.
    pub angular_speed: f32,
    pub phase: f32,
}

impl Orbit {
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        let angle = self.phase + elapsed * self.angular_speed;
        self.center + Vec3::new(angle.cos(), 0.0, angle.sin()) * self.radius
    }
}

struct PlanetLayout {
    radius: f32,
    orbit_radius: f32,
    angular_speed: f32,
    phase: f32,
    color: Color,
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    bounds: Res<MapBounds>,
    camera_config: Res<CameraConfig>,
) {
    info!("=== STRATEGY CONTROLS DEMO ===");

    spawn_lighting(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials, &bounds);
    spawn_planets(&mut commands, &mut meshes, &mut materials, bounds.center());
    spawn_ship(&mut commands, &mut meshes, &mut materials, bounds.center());
    spawn_camera_rig(&mut commands, bounds.center(), &camera_config);
}

pub fn orbit_planets(time: Res<Time>, mut planets: Query<(&Orbit, &mut Transform)>) {
    let elapsed = time.elapsed_secs();
    for (orbit, mut transform) in &mut planets {
        transform.translation = orbit.position_at(elapsed);
    }
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 1.0, -FRAC_PI_4)),
    ));
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    bounds: &MapBounds,
) {
    let size = bounds.size();
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size.x, size.y))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.08, 0.1, 0.16),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_translation(bounds.center()),
        PickShape::Box {
            size: Vec3::new(size.x, 0.01, size.y),
        },
        PickLayers(LAYER_TERRAIN),
    ));
}

fn spawn_planets(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    center: Vec3,
) {
    let planets = [
        PlanetLayout {
            radius: 1.0,
            orbit_radius: 5.0,
            angular_speed: 0.3,
            phase: 0.0,
            color: Color::srgb(0.85, 0.55, 0.3),
        },
        PlanetLayout {
            radius: 1.4,
            orbit_radius: 9.5,
            angular_speed: 0.15,
            phase: TAU / 3.0,
            color: Color::srgb(0.3, 0.6, 0.9),
        },
        PlanetLayout {
            radius: 0.8,
            orbit_radius: 14.0,
            angular_speed: 0.08,
            phase: 2.0 * TAU / 3.0,
            color: Color::srgb(0.55, 0.85, 0.45),
        },
    ];

    for (index, planet) in planets.into_iter().enumerate() {
        let orbit = Orbit {
            center,
            radius: planet.orbit_radius,
            angular_speed: planet.angular_speed,
            phase: planet.phase,
        };
        commands.spawn((
            Name::new(format!("Planet {}", index + 1)),
            Mesh3d(meshes.add(Sphere::new(planet.radius))),
            MeshMaterial3d(materials.add(planet.color)),
            Transform::from_translation(orbit.position_at(0.0)),
            orbit,
            PickShape::Sphere {
                radius: planet.radius,
            },
            PickLayers(LAYER_PLANET),
        ));
    }
}

fn spawn_ship(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    center: Vec3,
) {
    let size = Vec3::new(0.6, 0.4, 1.6);
    commands.spawn((
        Name::new("Ship"),
        Mesh3d(meshes.add(Cuboid::from_size(size))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.95))),
        Transform::from_translation(center + Vec3::new(0.0, 0.0, 2.0)),
        MovementActuator::default(),
        Selected,
        PickShape::Box { size },
        PickLayers(LAYER_SHIP),
    ));
}
