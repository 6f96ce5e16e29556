//! Trigger-zone detection.
//!
//! Each trigger zone diffs the set of bodies currently overlapping its
//! volume against the occupancy recorded on the
//! [`TriggerZone`](crate::components::triggerzone::TriggerZone) component and
//! triggers a [`TriggerEnteredEvent`] once per new entrant. Exited bodies
//! are forgotten, so leaving and re-entering notifies again.

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::triggerzone::TriggerZone;
use crate::events::trigger::TriggerEnteredEvent;

/// Detect bodies entering trigger volumes and notify observers.
pub fn trigger_zone_system(
    mut zones: Query<(Entity, &MapPosition, &BoxCollider, &mut TriggerZone)>,
    bodies: Query<(Entity, &MapPosition, &BoxCollider), Without<TriggerZone>>,
    mut commands: Commands,
) {
    for (zone_entity, zone_position, zone_collider, mut zone) in zones.iter_mut() {
        let mut current: FxHashSet<Entity> = FxHashSet::default();

        for (body, body_position, body_collider) in bodies.iter() {
            if zone_collider.overlaps(zone_position.pos, body_collider, body_position.pos) {
                current.insert(body);
            }
        }

        for body in current.iter() {
            if !zone.inside.contains(body) {
                debug!("Body {:?} entered trigger zone {:?}", body, zone_entity);
                commands.trigger(TriggerEnteredEvent {
                    zone: zone_entity,
                    body: *body,
                });
            }
        }

        zone.inside = current;
    }
}
