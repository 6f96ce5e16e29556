//! Collision event and the push-back observer.
//!
//! The slide-movement system triggers [`CollisionEvent`] for every contact a
//! kinematic body makes during its move attempt. The observer in this module
//! implements the reactive push: dynamic bodies hit by the character receive
//! an impulse away from the contact plus a random spin. Static and kinematic
//! bodies are left untouched.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::rigidbody::RigidBody;

/// Minimum and maximum factor applied to the impulse magnitude when
/// computing the spin of a pushed body.
pub const SPIN_FACTOR_MIN: f32 = 2.0;
pub const SPIN_FACTOR_MAX: f32 = 4.0;

/// Event fired when a sliding body contacts another collider.
///
/// `normal` is the contact normal pointing from `other` toward `body`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub body: Entity,
    pub other: Entity,
    pub normal: Vec2,
}

/// Spin torque for a push impulse: a random factor in
/// [`SPIN_FACTOR_MIN`, `SPIN_FACTOR_MAX`] times the impulse magnitude,
/// signed to match the impulse's horizontal direction. Horizontally neutral
/// impulses produce no spin.
pub fn spin_torque(impulse: Vec2, factor: f32) -> f32 {
    let sign = if impulse.x > 0.0 {
        1.0
    } else if impulse.x < 0.0 {
        -1.0
    } else {
        0.0
    };
    factor * impulse.length() * sign
}

/// Observer that pushes dynamic bodies hit by a sliding character.
///
/// Contract
/// - Reads the colliding body's current velocity magnitude.
/// - If the collided entity has a dynamic [`RigidBody`], applies an impulse
///   of `-normal * |velocity|` and a spin torque from [`spin_torque`] with a
///   factor drawn uniformly from [2.0, 4.0].
/// - Any other collided entity (walls, other characters) is ignored.
pub fn observe_push_on_collision(
    trigger: On<CollisionEvent>,
    mut bodies: Query<&mut RigidBody>,
) {
    let event = trigger.event();

    // Speed of the moving body at the time of contact.
    let Ok(mover) = bodies.get(event.body) else {
        return;
    };
    let speed = mover.speed();

    // Validity check: only dynamic bodies react to the push.
    let Ok(mut other) = bodies.get_mut(event.other) else {
        return;
    };
    if !other.is_dynamic() {
        return;
    }

    let impulse = -event.normal * speed;
    let factor = SPIN_FACTOR_MIN + fastrand::f32() * (SPIN_FACTOR_MAX - SPIN_FACTOR_MIN);
    let torque = spin_torque(impulse, factor);

    other.apply_impulse(impulse);
    other.apply_torque_impulse(torque);

    debug!(
        "Pushed {:?} with impulse ({:.2}, {:.2}) torque {:.2}",
        event.other, impulse.x, impulse.y, torque
    );
}
