//! Input systems.
//!
//! - [`player_intent_system`] resamples the movement intent from the four
//!   directional action states and writes the desired velocity into the
//!   player's rigid body.
//! - [`restart_input_system`] turns a restart press into a
//!   [`RestartRequestedEvent`].

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::events::restart::RestartRequestedEvent;
use crate::resources::input::InputState;

/// Recompute each controlled entity's intent and desired velocity.
///
/// The intent is rebuilt from scratch every pass: each axis is the sum of
/// its two opposing directional states, so simultaneous opposing presses
/// cancel to zero. The desired velocity is `move_speed` along the
/// normalized intent, exactly zero when the intent is the zero vector.
pub fn player_intent_system(
    mut query: Query<(&mut PlayerControlled, &mut RigidBody)>,
    input_state: Res<InputState>,
) {
    for (mut controlled, mut rigidbody) in query.iter_mut() {
        let mut intent = Vec2::ZERO;
        if input_state.right.active {
            intent.x += 1.0;
        }
        if input_state.left.active {
            intent.x -= 1.0;
        }
        if input_state.down.active {
            intent.y += 1.0;
        }
        if input_state.up.active {
            intent.y -= 1.0;
        }

        controlled.intent = intent;
        rigidbody.velocity = controlled.move_speed * intent.normalize_or_zero();
    }
}

/// Trigger a scene restart when the restart action is pressed.
pub fn restart_input_system(input_state: Res<InputState>, mut commands: Commands) {
    if input_state.restart.just_pressed {
        commands.trigger(RestartRequestedEvent {});
    }
}
