use bevy_ecs::prelude::{Component, Entity};
use rustc_hash::FxHashSet;

/// Occupancy tracking for a trigger volume.
///
/// The trigger-zone system diffs the current overlap set against `inside`
/// so that an entered notification fires exactly once per qualifying entry.
/// Bodies are forgotten when they leave, so re-entering notifies again.
#[derive(Component, Clone, Debug, Default)]
pub struct TriggerZone {
    pub inside: FxHashSet<Entity>,
}

impl TriggerZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, body: Entity) -> bool {
        self.inside.contains(&body)
    }
}
