//! Movement systems.
//!
//! - [`slide_movement`] moves kinematic bodies: it integrates the desired
//!   velocity, separates the body from solid colliders along the axis of
//!   least penetration, cancels the velocity component into static contacts
//!   (sliding along walls instead of stopping dead), and triggers a
//!   [`CollisionEvent`] per contact.
//! - [`movement`] moves dynamic bodies: velocity and spin integration with
//!   friction damping, reflecting off solid static colliders.
//!
//! Both systems snapshot the solid colliders first and then mutate the
//! movers, so a body never collides with a stale copy of itself.

use bevy_ecs::prelude::*;
use glam::Vec2;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::{BodyMode, RigidBody};
use crate::components::rotation::Rotation;
use crate::events::collision::CollisionEvent;
use crate::resources::worldtime::WorldTime;

type ObstacleSnapshot = SmallVec<[(Entity, Vec2, BoxCollider, BodyMode); 8]>;

fn snapshot_solids(
    bodies: &Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut Rotation>,
        Option<&BoxCollider>,
    )>,
) -> ObstacleSnapshot {
    bodies
        .iter()
        .filter_map(|(entity, position, rigidbody, _, collider)| {
            let collider = collider?;
            if collider.solid {
                Some((entity, position.pos, *collider, rigidbody.mode))
            } else {
                None
            }
        })
        .collect()
}

/// Move kinematic bodies along their velocity, sliding at obstacles.
///
/// Contract
/// - Integrates `velocity * delta` into the position.
/// - For every overlapped solid collider: pushes the body out along the
///   minimum translation vector and triggers a [`CollisionEvent`] carrying
///   the contact normal (pointing from the obstacle toward the body).
/// - Static and kinematic contacts cancel the velocity component into the
///   contact so the body slides; dynamic contacts keep the velocity, since
///   the push-back observer moves the obstacle out of the way instead.
pub fn slide_movement(
    mut bodies: Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut Rotation>,
        Option<&BoxCollider>,
    )>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let obstacles = snapshot_solids(&bodies);

    for (entity, mut position, mut rigidbody, _, collider) in bodies.iter_mut() {
        if !rigidbody.is_kinematic() {
            continue;
        }
        let Some(collider) = collider else {
            continue;
        };

        let mut attempted = position.pos + rigidbody.velocity * time.delta;

        for (other, other_pos, other_collider, other_mode) in &obstacles {
            if *other == entity {
                continue;
            }
            let Some(mtv) = collider.separation(attempted, other_collider, *other_pos) else {
                continue;
            };
            attempted += mtv;
            let normal = mtv.normalize_or_zero();

            if *other_mode != BodyMode::Dynamic {
                let into = rigidbody.velocity.dot(normal);
                if into < 0.0 {
                    rigidbody.velocity -= normal * into;
                }
            }

            commands.trigger(CollisionEvent {
                body: entity,
                other: *other,
                normal,
            });
        }

        position.pos = attempted;
    }
}

/// Integrate dynamic bodies: velocity, spin, friction, wall reflection.
pub fn movement(
    mut bodies: Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        Option<&mut Rotation>,
        Option<&BoxCollider>,
    )>,
    time: Res<WorldTime>,
) {
    let obstacles = snapshot_solids(&bodies);

    for (entity, mut position, mut rigidbody, rotation, collider) in bodies.iter_mut() {
        if !rigidbody.is_dynamic() {
            continue;
        }

        position.pos += rigidbody.velocity * time.delta;
        if let Some(mut rotation) = rotation {
            rotation.degrees += rigidbody.angular_velocity * time.delta;
        }

        // Bounce off static solids.
        if let Some(collider) = collider {
            for (other, other_pos, other_collider, other_mode) in &obstacles {
                if *other == entity || *other_mode != BodyMode::Static {
                    continue;
                }
                let Some(mtv) = collider.separation(position.pos, other_collider, *other_pos)
                else {
                    continue;
                };
                position.pos += mtv;
                let normal = mtv.normalize_or_zero();
                let into = rigidbody.velocity.dot(normal);
                if into < 0.0 {
                    rigidbody.velocity -= 2.0 * normal * into;
                }
            }
        }

        let damping = (1.0 - rigidbody.friction * time.delta).max(0.0);
        rigidbody.velocity *= damping;
        rigidbody.angular_velocity *= damping;
    }
}
