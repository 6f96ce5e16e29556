//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when the
//! scene is restarted. Use this for observers, registered systems, and any
//! entity that must survive a full scene rebuild.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive scene restarts.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
