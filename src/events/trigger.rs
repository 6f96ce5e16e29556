//! Trigger-zone entry event and the goal observer.
//!
//! The trigger-zone system fires [`TriggerEnteredEvent`] once per qualifying
//! entry of a body into a trigger volume. The goal observer reacts to entries
//! into zones carrying a [`GoalZone`] component: when the entering body's
//! group name matches the zone's target, the injected victory banner is made
//! visible. Showing an already visible banner has no further effect, so
//! re-entries after victory are harmless.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::goal::GoalZone;
use crate::components::group::Group;
use crate::components::visibility::Visibility;

/// Event fired when a body starts overlapping a trigger zone.
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerEnteredEvent {
    pub zone: Entity,
    pub body: Entity,
}

/// Observer that reveals the victory banner when the goal's target enters.
///
/// Behavior
/// - Zones without a [`GoalZone`] component are plain detectors; nothing
///   happens for them here.
/// - Bodies without a [`Group`], or with a non-matching name, are ignored.
/// - On a match, the banner entity stored in the zone is made visible.
pub fn observe_goal_on_trigger(
    trigger: On<TriggerEnteredEvent>,
    zones: Query<&GoalZone>,
    groups: Query<&Group>,
    mut banners: Query<&mut Visibility>,
) {
    let event = trigger.event();

    let Ok(goal) = zones.get(event.zone) else {
        return;
    };
    let Ok(group) = groups.get(event.body) else {
        return;
    };
    if group.name() != goal.target {
        return;
    }

    match banners.get_mut(goal.banner) {
        Ok(mut visibility) => {
            visibility.show();
            info!("Goal! '{}' entered the goal zone", group.name());
        }
        Err(_) => {
            warn!(
                "Goal zone {:?} points at banner {:?} without Visibility",
                event.zone, goal.banner
            );
        }
    }
}
