use bevy::prelude::*;
use constants::movement::MOVER_FACING_EPSILON;

use super::scheduler::{Action, ActionKind, ActionLookup, ActionScheduler};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActuatorState {
    #[default]
    Idle,
    Rotating,
    Translating,
}

/// A straight-line move toward another entity. The destination may move or vanish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementOrder {
    pub destination: Entity,
    pub arrival_radius: f32,
    pub linear_speed: f32,
    pub angular_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Continue,
    Done,
}

/// Turns its entity toward a destination, then drives it there.
///
/// The two phases run one after the other, one [`MovementActuator::advance`]
/// step per tick. Aborting, from a new order or a pre-empting action, drops
/// straight back to `Idle`.
#[derive(Component, Debug, Default)]
#[require(Transform, ActionScheduler)]
pub struct MovementActuator {
    state: ActuatorState,
    order: Option<MovementOrder>,
}

impl MovementActuator {
    pub fn state(&self) -> ActuatorState {
        self.state
    }

    pub fn order(&self) -> Option<&MovementOrder> {
        self.order.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.state != ActuatorState::Idle
    }

    /// Install a new order, discarding any in flight. Returns the discarded order.
    pub fn begin(&mut self, order: MovementOrder) -> Option<MovementOrder> {
        let previous = self.abort();
        self.order = Some(order);
        self.state = ActuatorState::Rotating;
        previous
    }

    /// Drop the current order and return to `Idle`.
    pub fn abort(&mut self) -> Option<MovementOrder> {
        self.state = ActuatorState::Idle;
        self.order.take()
    }

    /// Run one step of the active phase against the destination's current position.
    pub fn advance(&mut self, transform: &mut Transform, destination: Vec3, dt: f32) -> Progress {
        let Some(order) = self.order else {
            self.state = ActuatorState::Idle;
            return Progress::Done;
        };

        match self.state {
            ActuatorState::Idle => Progress::Done,
            ActuatorState::Rotating => {
                if rotate_toward(transform, destination, order.angular_speed * dt) {
                    self.state = ActuatorState::Translating;
                }
                Progress::Continue
            }
            ActuatorState::Translating => {
                if translate_toward(transform, destination, &order, dt) {
                    self.abort();
                    Progress::Done
                } else {
                    Progress::Continue
                }
            }
        }
    }
}

impl Action for MovementActuator {
    fn cancel(&mut self) {
        if let Some(order) = self.abort() {
            debug!("Movement toward {} cancelled", order.destination);
        }
    }
}

impl ActionLookup for MovementActuator {
    fn action_mut(&mut self, kind: ActionKind) -> Option<&mut dyn Action> {
        match kind {
            ActionKind::Move => Some(self as &mut dyn Action),
            ActionKind::Hold => None,
        }
    }
}

/// Slerp toward facing `destination`. Returns true once facing it, snapping the last bit.
fn rotate_toward(transform: &mut Transform, destination: Vec3, t: f32) -> bool {
    let Ok(direction) = Dir3::new(destination - transform.translation) else {
        // Already there: no facing to reach.
        return true;
    };
    let desired = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;

    if transform.rotation.angle_between(desired) > MOVER_FACING_EPSILON {
        transform.rotation = transform.rotation.slerp(desired, t.clamp(0.0, 1.0));
    }
    if transform.rotation.angle_between(desired) <= MOVER_FACING_EPSILON {
        transform.rotation = desired;
        return true;
    }
    false
}

/// Step toward `destination` without overshooting. Returns true once inside the arrival radius.
fn translate_toward(
    transform: &mut Transform,
    destination: Vec3,
    order: &MovementOrder,
    dt: f32,
) -> bool {
    let remaining = destination - transform.translation;
    let distance = remaining.length();
    if distance <= order.arrival_radius {
        return true;
    }

    let step = (order.linear_speed * dt).clamp(0.0, distance);
    transform.translation += remaining / distance * step;

    transform.translation.distance(destination) <= order.arrival_radius
}
