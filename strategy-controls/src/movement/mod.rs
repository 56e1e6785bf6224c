//! Point-and-click movement for selected entities.
//!
//! A click resolves to a destination entity through a layer-filtered ray
//! cast. Each selected entity then claims its exclusive action slot and its
//! [`actuator::MovementActuator`] turns to face the destination before
//! driving toward it, one step per tick.
//!
//! ```text
//! InputFrame ─> PickRequest ─> DestinationPicked ─> MovementOrder
//!           └─> HoldPositionRequest ─> ActionScheduler ─> cancel()
//! ```

/// Turn-then-translate state machine driven once per tick.
pub mod actuator;

/// Movement tunables loaded from the settings asset.
pub mod config;

/// Events and systems that turn clicks into orders and step active movers.
pub mod orders;

/// Pick shapes, layer masks and nearest-hit ray casting.
pub mod picking;

/// Exclusive action slot shared by the commands an entity can run.
pub mod scheduler;

use bevy::prelude::*;

use crate::engine::core::app_state::{AppState, ControlSet};
use orders::{
    DestinationPicked, HoldPositionRequest, MovementEnded, PickRequest, advance_movement,
    emit_order_requests, hold_position, issue_move_orders, resolve_destination_picks,
};

pub use actuator::MovementActuator;
pub use config::MovementConfig;
pub use orders::Selected;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PickRequest>()
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
                )
                    .chain()
                    .in_set(ControlSet::Movement)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
