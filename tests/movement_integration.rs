//! Character movement, sliding, push-back, and animation integration tests.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;

use pushball::components::animation::Animation;
use pushball::components::boxcollider::BoxCollider;
use pushball::components::mapposition::MapPosition;
use pushball::components::playercontrolled::PlayerControlled;
use pushball::components::rigidbody::RigidBody;
use pushball::components::rotation::Rotation;
use pushball::components::sprite::Sprite;
use pushball::events::collision::{
    SPIN_FACTOR_MAX, SPIN_FACTOR_MIN, observe_push_on_collision,
};
use pushball::game::{ANIM_IDLE, ANIM_MOVE};
use pushball::resources::animationstore::{AnimationResource, AnimationStore};
use pushball::resources::input::InputState;
use pushball::resources::worldtime::WorldTime;
use pushball::systems::animation::{animation, select_player_animation};
use pushball::systems::facing::{ROW_RIGHT, sprite_facing_system};
use pushball::systems::input::player_intent_system;
use pushball::systems::movement::{movement, slide_movement};

const EPSILON: f32 = 1e-4;
const MOVE_SPEED: f32 = 220.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        delta,
        elapsed: delta,
        ..Default::default()
    });
    world.insert_resource(InputState::default());
    world.spawn(Observer::new(observe_push_on_collision));
    world.flush();
    world
}

fn spawn_player(world: &mut World, pos: Vec2, move_speed: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(pos.x, pos.y),
            Sprite::new("player-sheet", 16.0, 24.0),
            Animation::new(ANIM_IDLE),
            PlayerControlled::new(move_speed),
            RigidBody::kinematic(),
            BoxCollider::new(16.0, 24.0),
        ))
        .id()
}

fn spawn_wall(world: &mut World, pos: Vec2, width: f32, height: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(pos.x, pos.y),
            RigidBody::fixed(),
            BoxCollider::new(width, height),
        ))
        .id()
}

fn tick_intent(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_intent_system);
    schedule.run(world);
}

fn tick_intent_and_facing(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_intent_system, sprite_facing_system).chain());
    schedule.run(world);
}

fn tick_slide(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(slide_movement);
    schedule.run(world);
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_animation(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(animation);
    schedule.run(world);
}

fn tick_clip_selection(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((player_intent_system, select_player_animation).chain());
    schedule.run(world);
}

fn velocity_of(world: &World, entity: Entity) -> Vec2 {
    world.get::<RigidBody>(entity).unwrap().velocity
}

// ==================== INTENT TESTS ====================

#[test]
fn no_input_gives_exactly_zero_velocity() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    tick_intent(&mut world);

    assert_eq!(velocity_of(&world, player), Vec2::ZERO);
}

#[test]
fn opposing_presses_cancel_per_axis() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    {
        let mut input = world.resource_mut::<InputState>();
        input.left.press();
        input.right.press();
        input.up.press();
    }
    tick_intent(&mut world);

    // Horizontal cancels out; vertical is up at full speed.
    let velocity = velocity_of(&world, player);
    assert!(approx_eq(velocity.x, 0.0));
    assert!(approx_eq(velocity.y, -MOVE_SPEED));
}

#[test]
fn all_four_directions_held_is_standstill() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    world.resource_mut::<InputState>().release_all();
    {
        let mut input = world.resource_mut::<InputState>();
        input.left.press();
        input.right.press();
        input.up.press();
        input.down.press();
    }
    tick_intent(&mut world);

    assert_eq!(velocity_of(&world, player), Vec2::ZERO);
}

#[test]
fn diagonal_movement_is_normalized() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    {
        let mut input = world.resource_mut::<InputState>();
        input.right.press();
        input.down.press();
    }
    tick_intent(&mut world);

    let velocity = velocity_of(&world, player);
    assert!(approx_eq(velocity.length(), MOVE_SPEED));
    assert!(approx_eq(velocity.x, velocity.y));
}

// ==================== FACING TESTS ====================

#[test]
fn facing_row_follows_intent_regardless_of_speed() {
    for move_speed in [40.0, MOVE_SPEED, 1000.0] {
        let mut world = make_world(1.0 / 60.0);
        let player = spawn_player(&mut world, Vec2::ZERO, move_speed);

        world.resource_mut::<InputState>().right.press();
        tick_intent_and_facing(&mut world);

        let sprite = world.get::<Sprite>(player).unwrap();
        assert_eq!(sprite.row, ROW_RIGHT);
    }
}

#[test]
fn idle_player_keeps_last_facing() {
    let mut world = make_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    world.resource_mut::<InputState>().right.press();
    tick_intent_and_facing(&mut world);
    assert_eq!(world.get::<Sprite>(player).unwrap().row, ROW_RIGHT);

    // Release everything: the intent goes to zero and the row stays put.
    world.resource_mut::<InputState>().release_all();
    tick_intent_and_facing(&mut world);
    assert_eq!(world.get::<Sprite>(player).unwrap().row, ROW_RIGHT);
}

// ==================== SLIDE MOVEMENT TESTS ====================

#[test]
fn player_stops_at_wall_face() {
    let mut world = make_world(0.15);
    let player = spawn_player(&mut world, Vec2::new(80.0, 0.0), MOVE_SPEED);
    let wall = spawn_wall(&mut world, Vec2::new(100.0, 0.0), 16.0, 100.0);

    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vec2::new(100.0, 0.0));
    tick_slide(&mut world);

    // Wall face at x = 92, player half-width 8: resting position x = 84.
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 84.0));
    assert!(approx_eq(pos.y, 0.0));

    // The into-wall velocity component is gone.
    let velocity = velocity_of(&world, player);
    assert!(approx_eq(velocity.x, 0.0));

    // Static bodies take no impulse from the contact.
    let wall_rb = world.get::<RigidBody>(wall).unwrap();
    assert!(approx_eq(wall_rb.speed(), 0.0));
    assert!(approx_eq(wall_rb.angular_velocity, 0.0));
}

#[test]
fn player_slides_along_wall() {
    let mut world = make_world(0.15);
    let player = spawn_player(&mut world, Vec2::new(80.0, 0.0), MOVE_SPEED);
    spawn_wall(&mut world, Vec2::new(100.0, 0.0), 16.0, 100.0);

    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vec2::new(100.0, 50.0));
    tick_slide(&mut world);

    // Clamped against the wall on x, free on y.
    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 84.0));
    assert!(approx_eq(pos.y, 7.5));

    let velocity = velocity_of(&world, player);
    assert!(approx_eq(velocity.x, 0.0));
    assert!(approx_eq(velocity.y, 50.0));
}

#[test]
fn player_clear_of_obstacles_moves_freely() {
    let mut world = make_world(0.25);
    let player = spawn_player(&mut world, Vec2::new(10.0, 20.0), MOVE_SPEED);
    spawn_wall(&mut world, Vec2::new(500.0, 0.0), 16.0, 100.0);

    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vec2::new(40.0, -8.0));
    tick_slide(&mut world);

    let pos = world.get::<MapPosition>(player).unwrap().pos;
    assert!(approx_eq(pos.x, 20.0));
    assert!(approx_eq(pos.y, 18.0));
}

// ==================== PUSH-BACK TESTS ====================

#[test]
fn contact_pushes_dynamic_ball() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);
    let ball = world
        .spawn((
            MapPosition::new(20.0, 0.0),
            Rotation::default(),
            RigidBody::dynamic(0.0),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();

    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vec2::new(100.0, 0.0));
    tick_slide(&mut world);

    // Impulse is the contact normal reversed, scaled by the mover's speed.
    let ball_rb = *world.get::<RigidBody>(ball).unwrap();
    assert!(approx_eq(ball_rb.velocity.x, 100.0));
    assert!(approx_eq(ball_rb.velocity.y, 0.0));

    // Spin: bounded by the factor range, signed to match the push direction.
    let impulse_magnitude = 100.0;
    assert!(ball_rb.angular_velocity >= SPIN_FACTOR_MIN * impulse_magnitude - EPSILON);
    assert!(ball_rb.angular_velocity <= SPIN_FACTOR_MAX * impulse_magnitude + EPSILON);

    // The player keeps its velocity against a dynamic contact; the ball
    // moves out of the way instead.
    assert!(approx_eq(velocity_of(&world, player).x, 100.0));
}

#[test]
fn leftward_push_spins_the_other_way() {
    let mut world = make_world(0.1);
    let player = spawn_player(&mut world, Vec2::new(40.0, 0.0), MOVE_SPEED);
    let ball = world
        .spawn((
            MapPosition::new(20.0, 0.0),
            Rotation::default(),
            RigidBody::dynamic(0.0),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();

    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vec2::new(-100.0, 0.0));
    tick_slide(&mut world);

    let ball_rb = *world.get::<RigidBody>(ball).unwrap();
    assert!(approx_eq(ball_rb.velocity.x, -100.0));
    assert!(ball_rb.angular_velocity < 0.0);
}

// ==================== DYNAMIC MOVEMENT TESTS ====================

#[test]
fn dynamic_body_integrates_and_damps() {
    let mut world = make_world(0.5);
    let ball = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Rotation::default(),
            RigidBody::dynamic(1.0),
        ))
        .id();
    {
        let mut rb = world.get_mut::<RigidBody>(ball).unwrap();
        rb.set_velocity(Vec2::new(10.0, 0.0));
        rb.angular_velocity = 90.0;
    }

    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(ball).unwrap().pos;
    assert!(approx_eq(pos.x, 5.0));

    let rotation = world.get::<Rotation>(ball).unwrap();
    assert!(approx_eq(rotation.degrees, 45.0));

    // friction 1.0 over half a second halves both velocities.
    let rb = world.get::<RigidBody>(ball).unwrap();
    assert!(approx_eq(rb.velocity.x, 5.0));
    assert!(approx_eq(rb.angular_velocity, 45.0));
}

#[test]
fn heavy_friction_never_reverses_velocity() {
    let mut world = make_world(1.0);
    let ball = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::dynamic(5.0)))
        .id();
    world
        .get_mut::<RigidBody>(ball)
        .unwrap()
        .set_velocity(Vec2::new(10.0, 0.0));

    // friction * delta > 1: the damping clamps at zero instead of flipping.
    tick_movement(&mut world);
    assert!(approx_eq(world.get::<RigidBody>(ball).unwrap().speed(), 0.0));
}

#[test]
fn ball_bounces_off_wall() {
    let mut world = make_world(0.1);
    let ball = world
        .spawn((
            MapPosition::new(85.0, 0.0),
            RigidBody::dynamic(0.0),
            BoxCollider::new(24.0, 24.0),
        ))
        .id();
    spawn_wall(&mut world, Vec2::new(100.0, 0.0), 16.0, 100.0);

    world
        .get_mut::<RigidBody>(ball)
        .unwrap()
        .set_velocity(Vec2::new(100.0, 0.0));
    tick_movement(&mut world);

    // Pushed back out of the wall, velocity reflected.
    let pos = world.get::<MapPosition>(ball).unwrap().pos;
    assert!(approx_eq(pos.x, 80.0));
    assert!(approx_eq(velocity_of(&world, ball).x, -100.0));
}

// ==================== ANIMATION TESTS ====================

fn make_animation_world(delta: f32) -> World {
    let mut world = make_world(delta);
    let mut store = AnimationStore::new();
    store.insert(
        ANIM_MOVE,
        AnimationResource {
            tex_key: "player-sheet".into(),
            frame_count: 4,
            fps: 10.0,
            looped: true,
        },
    );
    store.insert(
        "one_shot",
        AnimationResource {
            tex_key: "player-sheet".into(),
            frame_count: 3,
            fps: 10.0,
            looped: false,
        },
    );
    store.insert(
        "frozen",
        AnimationResource {
            tex_key: "player-sheet".into(),
            frame_count: 3,
            fps: 0.0,
            looped: true,
        },
    );
    world.insert_resource(store);
    world
}

#[test]
fn idle_and_move_clips_follow_velocity() {
    let mut world = make_animation_world(1.0 / 60.0);
    let player = spawn_player(&mut world, Vec2::ZERO, MOVE_SPEED);

    tick_clip_selection(&mut world);
    assert_eq!(
        world.get::<Animation>(player).unwrap().animation_key,
        ANIM_IDLE
    );

    world.resource_mut::<InputState>().right.press();
    tick_clip_selection(&mut world);
    assert_eq!(
        world.get::<Animation>(player).unwrap().animation_key,
        ANIM_MOVE
    );

    world.resource_mut::<InputState>().release_all();
    tick_clip_selection(&mut world);
    assert_eq!(
        world.get::<Animation>(player).unwrap().animation_key,
        ANIM_IDLE
    );
}

#[test]
fn blocked_player_shows_idle() {
    let mut world = make_animation_world(1.0 / 60.0);
    // Start flush against the wall face so the whole step is blocked.
    let player = spawn_player(&mut world, Vec2::new(84.0, 0.0), MOVE_SPEED);
    spawn_wall(&mut world, Vec2::new(100.0, 0.0), 16.0, 100.0);

    // Walking straight into the wall: the resulting velocity is zero, so
    // the clip selection lands on idle even though a key is held.
    world.resource_mut::<InputState>().right.press();
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (player_intent_system, slide_movement, select_player_animation).chain(),
    );
    schedule.run(&mut world);

    assert_eq!(
        world.get::<Animation>(player).unwrap().animation_key,
        ANIM_IDLE
    );
}

#[test]
fn looped_clip_advances_and_wraps() {
    let mut world = make_animation_world(0.25);
    let entity = world
        .spawn((
            Animation::new(ANIM_MOVE),
            Sprite::new("player-sheet", 16.0, 24.0),
        ))
        .id();

    // 0.25s at 10 fps is two whole frames with 0.05s left over.
    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 2);

    // Another 0.25s: three more steps, wrapping past frame 3 back to 1.
    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 1);
}

#[test]
fn zero_fps_clip_never_advances() {
    let mut world = make_animation_world(1.0);
    let entity = world
        .spawn((
            Animation::new("frozen"),
            Sprite::new("player-sheet", 16.0, 24.0),
        ))
        .id();

    // A clip with no playback rate stays on its first frame.
    tick_animation(&mut world);
    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 0);
    assert_eq!(world.get::<Animation>(entity).unwrap().elapsed_time, 0.0);
}

#[test]
fn one_shot_clip_holds_last_frame() {
    let mut world = make_animation_world(1.0);
    let entity = world
        .spawn((
            Animation::new("one_shot"),
            Sprite::new("player-sheet", 16.0, 24.0),
        ))
        .id();

    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 2);

    tick_animation(&mut world);
    assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 2);
}
