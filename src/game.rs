//! Scene lifecycle hooks.
//!
//! The hooks in this module are registered in the
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the game-state and restart observers:
//!
//! - [`setup`] registers the animation clips and requests the Playing state.
//! - [`spawn_scene`] builds the whole scene from the
//!   [`SceneLayout`](crate::resources::scenelayout::SceneLayout): player,
//!   ball, goal zone with its injected banner, and the arena walls.
//! - [`clean_scene`] despawns every non-persistent entity.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::goal::GoalZone;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::playercontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::sprite::Sprite;
use crate::components::triggerzone::TriggerZone;
use crate::components::visibility::Visibility;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::scenelayout::SceneLayout;

/// Animation clip keys registered by [`setup`].
pub const ANIM_IDLE: &str = "player_idle";
pub const ANIM_MOVE: &str = "player_move";

/// Group names used by the scene.
pub const GROUP_PLAYER: &str = "player";
pub const GROUP_BALL: &str = "Ball";
pub const GROUP_WALL: &str = "wall";
pub const GROUP_GOAL: &str = "goal";
pub const GROUP_BANNER: &str = "banner";

const PLAYER_WIDTH: f32 = 16.0;
const PLAYER_HEIGHT: f32 = 24.0;
const WALL_THICKNESS: f32 = 16.0;

/// Register animation clips and request the Playing state.
pub fn setup(mut commands: Commands, mut next_state: ResMut<NextGameState>) {
    let mut anim_store = AnimationStore::new();
    anim_store.insert(
        ANIM_IDLE,
        AnimationResource {
            tex_key: "player-sheet".into(),
            frame_count: 4,
            fps: 4.0,
            looped: true,
        },
    );
    anim_store.insert(
        ANIM_MOVE,
        AnimationResource {
            tex_key: "player-sheet".into(),
            frame_count: 6,
            fps: 10.0,
            looped: true,
        },
    );
    commands.insert_resource(anim_store);

    next_state.set(GameStates::Playing);
    info!("Setup done, next state set to Playing");
}

/// Build the scene from the layout: banner, goal zone, player, ball, walls.
pub fn spawn_scene(mut commands: Commands, config: Res<GameConfig>, layout: Res<SceneLayout>) {
    // Victory banner, hidden until the ball scores. Spawned first so its
    // entity id can be injected into the goal zone.
    let banner = commands
        .spawn((
            Group::new(GROUP_BANNER),
            MapPosition::new(layout.banner.x, layout.banner.y),
            Visibility::hidden(),
        ))
        .id();

    // Goal zone: a non-solid trigger volume watching for the ball.
    commands.spawn((
        Group::new(GROUP_GOAL),
        MapPosition::new(layout.goal.x, layout.goal.y),
        BoxCollider::trigger(layout.goal.width, layout.goal.height),
        TriggerZone::new(),
        GoalZone::new(GROUP_BALL, banner),
    ));

    // Player character.
    commands.spawn((
        Group::new(GROUP_PLAYER),
        MapPosition::new(layout.player.x, layout.player.y),
        Sprite::new("player-sheet", PLAYER_WIDTH, PLAYER_HEIGHT),
        Animation::new(ANIM_IDLE),
        PlayerControlled::new(config.move_speed),
        RigidBody::kinematic(),
        BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT),
    ));

    // Ball: the only dynamic body in the scene.
    let ball_size = layout.ball.radius * 2.0;
    commands.spawn((
        Group::new(GROUP_BALL),
        MapPosition::new(layout.ball.x, layout.ball.y),
        Sprite::new("ball", ball_size, ball_size),
        Rotation::default(),
        RigidBody::dynamic(config.ball_friction),
        BoxCollider::new(ball_size, ball_size),
    ));

    // Arena walls.
    let w = config.arena_width;
    let h = config.arena_height;
    let t = WALL_THICKNESS;
    let walls = [
        (w * 0.5, -t * 0.5, w + 2.0 * t, t),
        (w * 0.5, h + t * 0.5, w + 2.0 * t, t),
        (-t * 0.5, h * 0.5, t, h),
        (w + t * 0.5, h * 0.5, t, h),
    ];
    for (x, y, width, height) in walls {
        commands.spawn((
            Group::new(GROUP_WALL),
            MapPosition::new(x, y),
            RigidBody::fixed(),
            BoxCollider::new(width, height),
        ));
    }

    info!(
        "Scene spawned: player at ({}, {}), ball at ({}, {}), goal at ({}, {})",
        layout.player.x, layout.player.y, layout.ball.x, layout.ball.y, layout.goal.x, layout.goal.y
    );
}

/// Despawn every entity that is not marked [`Persistent`].
pub fn clean_scene(mut commands: Commands, query: Query<Entity, Without<Persistent>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
