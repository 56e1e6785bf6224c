use bevy::ecs::error::BevyError;
use bevy::prelude::*;
use constants::camera::CAMERA_INITIAL_OFFSET;

use super::config::CameraConfig;
use super::rig::{CameraRig, RigCamera};
use crate::engine::bounds::MapBounds;
use crate::engine::error::SetupError;
use crate::engine::input::sampler::InputFrame;

/// Spawn a rig base at `position` with its child camera parked at the default offset.
pub fn spawn_camera_rig(commands: &mut Commands, position: Vec3, config: &CameraConfig) -> Entity {
    let offset = Vec3::from_array(CAMERA_INITIAL_OFFSET);
    let camera = commands
        .spawn((
            RigCamera,
            Camera3d::default(),
            Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .id();

    commands
        .spawn((
            Name::new("Camera Rig"),
            CameraRig::new(camera, config.clamp_height(offset.y)),
            Transform::from_translation(position),
        ))
        .add_child(camera)
        .id()
}

/// Drive every camera rig from this frame's input snapshot.
pub fn camera_rig_controller(
    time: Res<Time>,
    input: Res<InputFrame>,
    config: Res<CameraConfig>,
    bounds: Res<MapBounds>,
    mut rigs: Query<(&mut CameraRig, &mut Transform), Without<RigCamera>>,
    mut cameras: Query<(&mut Transform, &GlobalTransform, &Camera), With<RigCamera>>,
) {
    let dt = time.delta_secs();

    for (mut rig, mut base) in &mut rigs {
        let Ok((mut camera_local, camera_global, camera)) = cameras.get_mut(rig.camera()) else {
            continue;
        };

        rig.rotate(&config, &input, &mut base);

        if rig.zoom(&config, input.scroll, camera_local.translation.y) {
            debug!("Camera zoom target: {:.2}", rig.state().zoom_height);
        }

        let ground_ray = input
            .pointer
            .and_then(|pointer| camera.viewport_to_world(camera_global, pointer).ok());

        rig.tick(
            &config,
            &input,
            ground_ray.as_ref(),
            &bounds,
            &mut base,
            &mut camera_local,
            dt,
        );
    }
}

/// Every rig must reference a live child carrying a `Camera`.
pub fn validate_rig_wiring(
    rigs: Query<(Entity, &CameraRig)>,
    cameras: Query<Has<Camera>, With<RigCamera>>,
) -> Result<(), BevyError> {
    for (rig, camera_rig) in &rigs {
        let camera = camera_rig.camera();
        match cameras.get(camera) {
            Ok(true) => {}
            Ok(false) => return Err(SetupError::RigCameraWithoutCamera { rig, camera }.into()),
            Err(_) => return Err(SetupError::MissingRigCamera { rig, camera }.into()),
        }
    }
    info!("Camera rig wiring validated ({} rig(s))", rigs.iter().count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn controller_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<InputFrame>()
            .init_resource::<CameraConfig>()
            .init_resource::<MapBounds>()
            .add_systems(Update, camera_rig_controller);
        app
    }

    fn spawn_rig(world: &mut World) -> (Entity, Entity) {
        let camera = world
            .spawn((
                RigCamera,
                Camera::default(),
                Transform::from_xyz(0.0, 20.0, 40.0).looking_at(Vec3::ZERO, Vec3::Y),
            ))
            .id();
        let rig = world.spawn(CameraRig::new(camera, 20.0)).id();
        (rig, camera)
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(1.0 / 60.0));
        app.update();
    }

    #[test]
    fn keyboard_input_pans_the_rig() {
        let mut app = controller_app();
        let (rig, _) = spawn_rig(app.world_mut());
        app.world_mut().resource_mut::<InputFrame>().move_axis = Vec2::new(0.0, 1.0);

        for _ in 0..30 {
            step(&mut app);
        }

        let base = app.world().get::<Transform>(rig).map(|t| t.translation);
        assert!(base.is_some_and(|p| p.z < 0.0 && p.x.abs() < 1e-4));
    }

    #[test]
    fn scroll_moves_the_child_camera_down() {
        let mut app = controller_app();
        let (_, camera) = spawn_rig(app.world_mut());
        app.world_mut().resource_mut::<InputFrame>().scroll = 600.0;
        step(&mut app);
        app.world_mut().resource_mut::<InputFrame>().scroll = 0.0;

        for _ in 0..60 {
            step(&mut app);
        }

        let height = app.world().get::<Transform>(camera).map(|t| t.translation.y);
        assert!(height.is_some_and(|y| y < 20.0));
    }

    #[test]
    fn wiring_accepts_a_rig_with_its_camera() {
        let mut world = World::new();
        spawn_rig(&mut world);
        let result = world.run_system_once(validate_rig_wiring);
        assert!(matches!(result, Ok(Ok(()))));
    }

    #[test]
    fn wiring_rejects_a_dangling_camera_reference() {
        let mut world = World::new();
        let camera = world.spawn(RigCamera).id();
        world.despawn(camera);
        world.spawn(CameraRig::new(camera, 20.0));

        let result = world.run_system_once(validate_rig_wiring);
        assert!(matches!(result, Ok(Err(_))));
    }

    #[test]
    fn wiring_rejects_a_camera_marker_without_camera() {
        let mut world = World::new();
        let camera = world.spawn(RigCamera).id();
        world.spawn(CameraRig::new(camera, 20.0));

        let result = world.run_system_once(validate_rig_wiring);
        assert!(matches!(result, Ok(Err(_))));
    }
}
