use bevy_ecs::prelude::{Component, Entity};

/// Goal controller configuration attached to a trigger-zone entity.
///
/// `target` is the group name that scores ("Ball"); `banner` is the victory
/// display entity, injected at spawn time so the observer never has to look
/// it up by name.
#[derive(Component, Clone, Debug)]
pub struct GoalZone {
    pub target: String,
    pub banner: Entity,
}

impl GoalZone {
    pub fn new(target: impl Into<String>, banner: Entity) -> Self {
        Self {
            target: target.into(),
            banner,
        }
    }
}
