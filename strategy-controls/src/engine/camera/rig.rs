use bevy::prelude::*;
use constants::input::{DISPLACEMENT_DEADZONE_SQ, SCROLL_DEADZONE, SCROLL_NORMALIZER};

use super::config::CameraConfig;
use crate::engine::bounds::MapBounds;
use crate::engine::input::sampler::{ButtonSample, InputFrame};
use crate::engine::ray::ground_intersection;

/// Rig-local axis the camera dollies along while zooming.
const RIG_FORWARD: Vec3 = Vec3::NEG_Z;

/// Per-rig motion bookkeeping. The base position itself lives on the rig's `Transform`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraMotionState {
    /// Heading in degrees, clockwise when seen from above, wrapped to 0..360.
    pub base_yaw: f32,
    /// Target local height of the child camera, always within the configured range.
    pub zoom_height: f32,
    /// Ground-plane velocity measured from the last tick's position change.
    pub horizontal_velocity: Vec3,
    pub speed: f32,
    /// Accumulated input displacement for the current tick. Zero between ticks.
    pub pending_displacement: Vec3,
    last_position: Option<Vec3>,
}

/// Grab point of a drag-pan, valid while the pan button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    start: Option<Vec3>,
}

impl DragSession {
    pub fn start_point(&self) -> Option<Vec3> {
        self.start
    }

    /// Returns the displacement that keeps the grabbed ground point under the pointer.
    pub fn update(&mut self, pan: ButtonSample, ground_hit: Option<Vec3>) -> Vec3 {
        if !pan.held {
            self.start = None;
            return Vec3::ZERO;
        }
        // A miss leaves the grab point untouched until the next press.
        let Some(hit) = ground_hit else {
            return Vec3::ZERO;
        };
        if pan.just_pressed {
            self.start = Some(hit);
            return Vec3::ZERO;
        }
        self.start.map_or(Vec3::ZERO, |start| start - hit)
    }
}

/// Strategy camera base. Pans, rotates and zooms over the map; the child camera
/// entity named by `camera` holds the zoom offset and always looks at the base.
#[derive(Component, Debug, Clone)]
#[require(Transform, Visibility)]
pub struct CameraRig {
    camera: Entity,
    state: CameraMotionState,
    drag: DragSession,
}

/// Marker for the child camera driven by a [`CameraRig`].
#[derive(Component, Debug, Default)]
pub struct RigCamera;

impl CameraRig {
    pub fn new(camera: Entity, zoom_height: f32) -> Self {
        Self {
            camera,
            state: CameraMotionState {
                zoom_height,
                ..default()
            },
            drag: DragSession::default(),
        }
    }

    pub fn camera(&self) -> Entity {
        self.camera
    }

    pub fn state(&self) -> &CameraMotionState {
        &self.state
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Right and forward of the child camera, flattened onto the ground plane.
    pub fn ground_basis(base: &Transform, camera_local: &Transform) -> (Vec3, Vec3) {
        let rotation = base.rotation * camera_local.rotation;
        (
            ground_projected(rotation * Vec3::X),
            ground_projected(rotation * Vec3::NEG_Z),
        )
    }

    /// Yaw the base by horizontal pointer travel while the rotate button is held.
    pub fn rotate(&mut self, config: &CameraConfig, input: &InputFrame, base: &mut Transform) {
        if !input.rotate.held || input.pointer_delta.x == 0.0 {
            return;
        }
        self.state.base_yaw = (self.state.base_yaw
            + input.pointer_delta.x * config.max_rotation_speed)
            .rem_euclid(360.0);
        base.rotation = yaw_rotation(self.state.base_yaw);
    }

    /// Retarget the zoom height from a scroll reading. Returns whether the height changed.
    ///
    /// The new height is relative to where the camera currently sits, not to the
    /// previous target, and is clamped immediately; smoothing happens per tick.
    pub fn zoom(&mut self, config: &CameraConfig, scroll: f32, camera_height: f32) -> bool {
        let step = -scroll / SCROLL_NORMALIZER;
        if step.abs() <= SCROLL_DEADZONE {
            return false;
        }
        self.state.zoom_height = config.clamp_height(camera_height + step * config.step_size);
        true
    }

    /// Run one frame of the rig pipeline.
    ///
    /// Input stages (keyboard, screen edge, drag) accumulate into the pending
    /// displacement, which then drives the base through the acceleration or
    /// damping branch. The camera offset is smoothed toward the zoom target and
    /// the base is clamped into `bounds` last.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        config: &CameraConfig,
        input: &InputFrame,
        ground_ray: Option<&Ray3d>,
        bounds: &MapBounds,
        base: &mut Transform,
        camera_local: &mut Transform,
        dt: f32,
    ) {
        self.state.zoom_height = config.clamp_height(self.state.zoom_height);
        let (right, forward) = Self::ground_basis(base, camera_local);

        self.state.pending_displacement += keyboard_displacement(input.move_axis, right, forward);

        if config.use_edge_scroll {
            if let Some(pointer) = input.pointer {
                self.state.pending_displacement += edge_scroll_displacement(
                    pointer,
                    input.screen_size,
                    config.edge_tolerance,
                    right,
                    forward,
                );
            }
        }

        let ground_hit = ground_ray.and_then(|ray| ground_intersection(ray, 0.0));
        self.state.pending_displacement += self.drag.update(input.pan, ground_hit);

        self.update_velocity(base.translation, dt);
        self.update_base_position(config, base, dt);
        self.update_camera_offset(config, camera_local, dt);

        base.translation = bounds.clamp(base.translation);
    }

    fn update_velocity(&mut self, position: Vec3, dt: f32) {
        let last = self.state.last_position.unwrap_or(position);
        if dt > 0.0 {
            let mut velocity = (position - last) / dt;
            velocity.y = 0.0;
            self.state.horizontal_velocity = velocity;
        }
        self.state.last_position = Some(position);
    }

    fn update_base_position(&mut self, config: &CameraConfig, base: &mut Transform, dt: f32) {
        let state = &mut self.state;
        if state.pending_displacement.length_squared() > DISPLACEMENT_DEADZONE_SQ {
            let t = (dt * config.acceleration).clamp(0.0, 1.0);
            state.speed += (config.max_speed - state.speed) * t;
            base.translation += state.pending_displacement * state.speed * dt;
        } else {
            let t = (dt * config.damping).clamp(0.0, 1.0);
            state.horizontal_velocity = state.horizontal_velocity.lerp(Vec3::ZERO, t);
            base.translation += state.horizontal_velocity * dt;
        }
        state.pending_displacement = Vec3::ZERO;
    }

    fn update_camera_offset(&self, config: &CameraConfig, camera_local: &mut Transform, dt: f32) {
        let local = camera_local.translation;
        let height_change = self.state.zoom_height - local.y;
        let target = Vec3::new(local.x, self.state.zoom_height, local.z)
            - config.zoom_speed * height_change * RIG_FORWARD;

        let t = (dt * config.zoom_dampening).clamp(0.0, 1.0);
        camera_local.translation = local.lerp(target, t);
        camera_local.look_at(Vec3::ZERO, Vec3::Y);
    }
}

pub fn yaw_rotation(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(-yaw_degrees.to_radians())
}

fn ground_projected(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Unit displacement from the keyboard axis, or zero inside the deadzone.
pub fn keyboard_displacement(axis: Vec2, right: Vec3, forward: Vec3) -> Vec3 {
    let direction = (axis.x * right + axis.y * forward).normalize_or_zero();
    if direction.length_squared() > DISPLACEMENT_DEADZONE_SQ {
        direction
    } else {
        Vec3::ZERO
    }
}

/// Displacement requested by a pointer resting in the screen-edge band.
/// Both axes may trigger at once in a corner.
pub fn edge_scroll_displacement(
    pointer: Vec2,
    screen_size: Vec2,
    tolerance: f32,
    right: Vec3,
    forward: Vec3,
) -> Vec3 {
    let mut direction = Vec3::ZERO;

    if pointer.x < tolerance * screen_size.x {
        direction -= right;
    } else if pointer.x > (1.0 - tolerance) * screen_size.x {
        direction += right;
    }

    // Viewport y grows downward: the top band pushes forward.
    if pointer.y < tolerance * screen_size.y {
        direction += forward;
    } else if pointer.y > (1.0 - tolerance) * screen_size.y {
        direction -= forward;
    }

    direction
}
