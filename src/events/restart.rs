//! Scene restart event and observer.
//!
//! A restart is a full teardown: the `clean_scene` hook despawns every
//! entity without [`Persistent`](crate::components::persistent::Persistent)
//! and the `spawn_scene` hook registered in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) rebuilds
//! the scene from scratch. Nothing is carried over; the victory banner comes
//! back hidden, bodies respawn at their layout positions.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::systemsstore::SystemsStore;

/// Event fired when the restart command is activated.
#[derive(Event, Debug, Clone, Copy)]
pub struct RestartRequestedEvent {}

/// Observer that destroys and recreates the scene.
///
/// Contract
/// - Runs the `clean_scene` hook from [`SystemsStore`], despawning every
///   non-persistent entity (observers and registered systems survive).
/// - Runs the `spawn_scene` hook to rebuild the scene. Unconditional: no
///   confirmation, no partial reset.
pub fn observe_restart_request(
    _trigger: On<RestartRequestedEvent>,
    mut commands: Commands,
    systems_store: Res<SystemsStore>,
) {
    info!("Restart requested, rebuilding scene");

    let clean_scene_id = systems_store
        .get("clean_scene")
        .expect("clean_scene system not found in SystemsStore");
    commands.run_system(*clean_scene_id);

    let spawn_scene_id = systems_store
        .get("spawn_scene")
        .expect("spawn_scene system not found in SystemsStore");
    commands.run_system(*spawn_scene_id);
}
