use bevy::prelude::*;

use super::actuator::{MovementActuator, MovementOrder, Progress};
use super::config::MovementConfig;
use super::picking::{PickLayers, PickShape, cast_ray};
use super::scheduler::{ActionKind, ActionScheduler};
use crate::engine::camera::rig::RigCamera;
use crate::engine::input::sampler::InputFrame;

/// Entities that receive movement and hold orders.
#[derive(Component, Debug, Default)]
pub struct Selected;

/// Pointer click asking for a destination under `screen_point` (viewport pixels).
#[derive(Event, Debug, Clone, Copy)]
pub struct PickRequest {
    pub screen_point: Vec2,
}

/// A click that resolved to a destination entity.
#[derive(Event, Debug, Clone, Copy)]
pub struct DestinationPicked {
    pub destination: Entity,
    pub point: Vec3,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct HoldPositionRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Arrived,
    /// Replaced by a newer move order.
    Preempted,
    /// The action slot was taken by something else, such as holding position.
    Cancelled,
    DestinationLost,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEnded {
    pub entity: Entity,
    pub reason: EndReason,
}

pub fn emit_order_requests(
    input: Res<InputFrame>,
    mut picks: EventWriter<PickRequest>,
    mut holds: EventWriter<HoldPositionRequest>,
) {
    if input.pick.just_pressed {
        if let Some(screen_point) = input.pointer {
            picks.write(PickRequest { screen_point });
        }
    }
    if input.hold_pressed {
        holds.write(HoldPositionRequest);
    }
}

/// Cast each click through the rig camera against the destination layers.
pub fn resolve_destination_picks(
    mut requests: EventReader<PickRequest>,
    mut picked: EventWriter<DestinationPicked>,
    config: Res<MovementConfig>,
    cameras: Query<(&Camera, &GlobalTransform), With<RigCamera>>,
    targets: Query<(Entity, &GlobalTransform, &PickShape, &PickLayers)>,
) {
    for request in requests.read() {
        let Some(ray) = cameras
            .iter()
            .filter(|(camera, _)| camera.is_active)
            .find_map(|(camera, transform)| {
                camera.viewport_to_world(transform, request.screen_point).ok()
            })
        else {
            continue;
        };

        let Some(hit) = cast_ray(&ray, config.pick_mask, &targets) else {
            debug!("Pick at {} hit no destination", request.screen_point);
            continue;
        };

        picked.write(DestinationPicked {
            destination: hit.entity,
            point: hit.point,
        });
    }
}

/// Turn the latest resolved click into a move order for every selected entity.
pub fn issue_move_orders(
    mut picks: EventReader<DestinationPicked>,
    config: Res<MovementConfig>,
    mut movers: Query<(Entity, &mut ActionScheduler, &mut MovementActuator), With<Selected>>,
    mut ended: EventWriter<MovementEnded>,
) {
    let Some(pick) = picks.read().last() else {
        return;
    };

    for (entity, mut scheduler, mut actuator) in &mut movers {
        if entity == pick.destination {
            continue;
        }

        if let Some(previous) = actuator.abort() {
            info!(
                "Entity {entity}: move toward {} pre-empted",
                previous.destination
            );
            ended.write(MovementEnded {
                entity,
                reason: EndReason::Preempted,
            });
        }

        scheduler.request_slot(ActionKind::Move, &mut *actuator);
        actuator.begin(MovementOrder {
            destination: pick.destination,
            arrival_radius: config.arrival_radius,
            linear_speed: config.linear_speed,
            angular_speed: config.angular_speed,
        });
        info!("Entity {entity}: moving toward {}", pick.destination);
    }
}

pub fn hold_position(
    mut requests: EventReader<HoldPositionRequest>,
    mut movers: Query<(Entity, &mut ActionScheduler, &mut MovementActuator), With<Selected>>,
    mut ended: EventWriter<MovementEnded>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for (entity, mut scheduler, mut actuator) in &mut movers {
        let was_moving = actuator.is_active();
        scheduler.request_slot(ActionKind::Hold, &mut *actuator);

        if was_moving && !actuator.is_active() {
            info!("Entity {entity}: holding position");
            ended.write(MovementEnded {
                entity,
                reason: EndReason::Cancelled,
            });
        }
    }
}

/// Step every active actuator once against its destination's live position.
pub fn advance_movement(
    time: Res<Time>,
    mut movers: Query<(
        Entity,
        &mut Transform,
        &mut MovementActuator,
        &mut ActionScheduler,
    )>,
    destinations: Query<&GlobalTransform>,
    mut ended: EventWriter<MovementEnded>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut actuator, mut scheduler) in &mut movers {
        let Some(order) = actuator.order().copied() else {
            continue;
        };

        let Ok(destination) = destinations.get(order.destination) else {
            warn!(
                "Entity {entity}: destination {} no longer exists, abandoning move",
                order.destination
            );
            actuator.abort();
            scheduler.finish(ActionKind::Move);
            ended.write(MovementEnded {
                entity,
                reason: EndReason::DestinationLost,
            });
            continue;
        };

        if actuator.advance(&mut transform, destination.translation(), dt) == Progress::Done {
            scheduler.finish(ActionKind::Move);
            info!("Entity {entity}: arrived at {}", order.destination);
            ended.write(MovementEnded {
                entity,
                reason: EndReason::Arrived,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::sampler::ButtonSample;
    use crate::movement::actuator::ActuatorState;
    use std::time::Duration;

    #[derive(Resource, Default)]
    struct Endings(Vec<MovementEnded>);

    fn record_endings(mut events: EventReader<MovementEnded>, mut endings: ResMut<Endings>) {
        endings.0.extend(events.read().copied());
    }

    fn orders_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<InputFrame>()
            .init_resource::<MovementConfig>()
            .init_resource::<Endings>()
            .add_event::<PickRequest>()
            .add_event::<DestinationPicked>()
            .add_event::<HoldPositionRequest>()
            .add_event::<MovementEnded>()
            .add_systems(
                Update,
                (
                    emit_order_requests,
                    resolve_destination_picks,
                    issue_move_orders,
                    hold_position,
                    advance_movement,
                    record_endings,
                )
                    .chain(),
            );
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(1.0 / 60.0));
        app.update();
    }

    fn spawn_destination(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn(GlobalTransform::from_translation(position))
            .id()
    }

    fn spawn_mover(app: &mut App, selected: bool) -> Entity {
        let mut mover = app.world_mut().spawn(MovementActuator::default());
        if selected {
            mover.insert(Selected);
        }
        mover.id()
    }

    fn pick(app: &mut App, destination: Entity) {
        app.world_mut().send_event(DestinationPicked {
            destination,
            point: Vec3::ZERO,
        });
    }

    fn state(app: &App, entity: Entity) -> Option<ActuatorState> {
        app.world()
            .get::<MovementActuator>(entity)
            .map(MovementActuator::state)
    }

    fn endings(app: &App) -> &[MovementEnded] {
        &app.world().resource::<Endings>().0
    }

    #[test]
    fn only_selected_entities_take_orders() {
        let mut app = orders_app();
        let destination = spawn_destination(&mut app, Vec3::new(0.0, 0.0, -10.0));
        let selected = spawn_mover(&mut app, true);
        let idle = spawn_mover(&mut app, false);

        pick(&mut app, destination);
        step(&mut app);

        assert_ne!(state(&app, selected), Some(ActuatorState::Idle));
        assert_eq!(state(&app, idle), Some(ActuatorState::Idle));
        let scheduler = app.world().get::<ActionScheduler>(selected);
        assert_eq!(scheduler.and_then(|s| s.current()), Some(ActionKind::Move));
    }

    #[test]
    fn mover_arrives_and_releases_its_slot() {
        let mut app = orders_app();
        let destination = spawn_destination(&mut app, Vec3::new(0.0, 0.0, -6.0));
        let mover = spawn_mover(&mut app, true);

        pick(&mut app, destination);
        for _ in 0..240 {
            step(&mut app);
        }

        assert_eq!(
            endings(&app),
            [MovementEnded {
                entity: mover,
                reason: EndReason::Arrived
            }]
        );
        let position = app.world().get::<Transform>(mover).map(|t| t.translation);
        assert!(position.is_some_and(|p| p.distance(Vec3::new(0.0, 0.0, -6.0)) <= 2.0));
        let scheduler = app.world().get::<ActionScheduler>(mover);
        assert_eq!(scheduler.and_then(|s| s.current()), None);
    }

    #[test]
    fn hold_cancels_an_active_move() {
        let mut app = orders_app();
        let destination = spawn_destination(&mut app, Vec3::new(20.0, 0.0, 0.0));
        let mover = spawn_mover(&mut app, true);
        pick(&mut app, destination);
        step(&mut app);

        app.world_mut().resource_mut::<InputFrame>().hold_pressed = true;
        step(&mut app);
        app.world_mut().resource_mut::<InputFrame>().hold_pressed = false;

        assert_eq!(state(&app, mover), Some(ActuatorState::Idle));
        assert_eq!(
            endings(&app),
            [MovementEnded {
                entity: mover,
                reason: EndReason::Cancelled
            }]
        );
        let scheduler = app.world().get::<ActionScheduler>(mover);
        assert_eq!(scheduler.and_then(|s| s.current()), Some(ActionKind::Hold));
    }

    #[test]
    fn new_pick_preempts_the_current_order() {
        let mut app = orders_app();
        let first = spawn_destination(&mut app, Vec3::new(20.0, 0.0, 0.0));
        let second = spawn_destination(&mut app, Vec3::new(-20.0, 0.0, 0.0));
        let mover = spawn_mover(&mut app, true);

        pick(&mut app, first);
        step(&mut app);
        pick(&mut app, second);
        step(&mut app);

        let order = app
            .world()
            .get::<MovementActuator>(mover)
            .and_then(|a| a.order().copied());
        assert_eq!(order.map(|o| o.destination), Some(second));
        assert_eq!(
            endings(&app),
            [MovementEnded {
                entity: mover,
                reason: EndReason::Preempted
            }]
        );
    }

    #[test]
    fn vanished_destination_abandons_the_move() {
        let mut app = orders_app();
        let destination = spawn_destination(&mut app, Vec3::new(0.0, 0.0, -10.0));
        let mover = spawn_mover(&mut app, true);
        pick(&mut app, destination);
        step(&mut app);

        app.world_mut().despawn(destination);
        step(&mut app);

        assert_eq!(state(&app, mover), Some(ActuatorState::Idle));
        assert_eq!(
            endings(&app),
            [MovementEnded {
                entity: mover,
                reason: EndReason::DestinationLost
            }]
        );
    }

    #[test]
    fn unresolved_click_leaves_the_actuator_alone() {
        let mut app = orders_app();
        let mover = spawn_mover(&mut app, true);
        {
            let mut input = app.world_mut().resource_mut::<InputFrame>();
            input.pointer = Some(Vec2::new(100.0, 100.0));
            input.pick = ButtonSample {
                held: true,
                just_pressed: true,
                just_released: false,
            };
        }

        step(&mut app);

        assert_eq!(state(&app, mover), Some(ActuatorState::Idle));
        assert!(endings(&app).is_empty());
    }
}
