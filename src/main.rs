//! Pushball demo entry point.
//!
//! A headless "push the ball into the goal" scene built on **bevy_ecs**.
//! The player character is driven by a scripted input sequence, slides
//! against the arena walls, and knocks a dynamic ball around with impulses
//! and spin. A trigger region at the right edge reveals a victory banner
//! when the ball enters; a restart command tears the scene down and
//! rebuilds it.
//!
//! # Main Loop
//!
//! 1. Load configuration (INI) and the scene layout (JSON), both optional.
//! 2. Build the ECS world, register observers and lifecycle systems.
//! 3. Enter the Setup state, which registers animations and requests Playing.
//! 4. Run a fixed-timestep loop: inject scripted input, tick the schedule.
//! 5. Log the final scene state.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 600
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use pushball::components::group::Group;
use pushball::components::mapposition::MapPosition;
use pushball::components::persistent::Persistent;
use pushball::components::visibility::Visibility;
use pushball::events::collision::observe_push_on_collision;
use pushball::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use pushball::events::restart::observe_restart_request;
use pushball::events::trigger::observe_goal_on_trigger;
use pushball::game;
use pushball::resources::gameconfig::GameConfig;
use pushball::resources::gamestate::{GameState, GameStates, NextGameState};
use pushball::resources::input::InputState;
use pushball::resources::scenelayout::SceneLayout;
use pushball::resources::systemsstore::SystemsStore;
use pushball::resources::worldtime::WorldTime;
use pushball::systems::animation::{animation, select_player_animation};
use pushball::systems::collision::trigger_zone_system;
use pushball::systems::facing::sprite_facing_system;
use pushball::systems::gamestate::{check_pending_state, state_is_playing};
use pushball::systems::input::{player_intent_system, restart_input_system};
use pushball::systems::movement::{movement, slide_movement};
use pushball::systems::time::update_world_time;

/// Pushball: headless push-the-ball-into-the-goal scene.
#[derive(Parser)]
#[command(version, about = "Push the ball into the goal, headless demo")]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Restart the scene at this tick.
    #[arg(long, value_name = "TICK")]
    restart_at: Option<u32>,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to a JSON scene layout.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let layout = match &cli.scene {
        Some(path) => match SceneLayout::load_from_file(path) {
            Ok(layout) => layout,
            Err(e) => {
                log::warn!("{e}; using the default layout");
                SceneLayout::default()
            }
        },
        None => SceneLayout::default(),
    };

    let dt = 1.0 / config.tick_rate.max(1) as f32;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(config);
    world.insert_resource(layout);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());

    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));
    world.spawn((Observer::new(observe_goal_on_trigger), Persistent));
    world.spawn((Observer::new(observe_push_on_collision), Persistent));
    world.spawn((Observer::new(observe_restart_request), Persistent));
    // Ensure the observers are registered before any system triggers events.
    world.flush();

    // Scene lifecycle systems store.
    // NOTE: In bevy_ecs 0.18, registered systems are stored as entities.
    // They must be marked Persistent so they survive scene restarts.
    let mut systems_store = SystemsStore::new();

    let setup_system_id = world.register_system(game::setup);
    world
        .entity_mut(setup_system_id.entity())
        .insert(Persistent);
    systems_store.insert("setup", setup_system_id);

    let spawn_scene_system_id = world.register_system(game::spawn_scene);
    world
        .entity_mut(spawn_scene_system_id.entity())
        .insert(Persistent);
    systems_store.insert("spawn_scene", spawn_scene_system_id);

    let clean_scene_system_id = world.register_system(game::clean_scene);
    world
        .entity_mut(clean_scene_system_id.entity())
        .insert(Persistent);
    systems_store.insert("clean_scene", clean_scene_system_id);

    world.insert_resource(systems_store);
    world.flush();

    // Enter Setup immediately; it registers animations and requests Playing.
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {});
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(restart_input_system);
    update.add_systems(player_intent_system.run_if(state_is_playing));
    update.add_systems(sprite_facing_system.after(player_intent_system));
    update.add_systems(slide_movement.after(player_intent_system));
    update.add_systems(movement.after(slide_movement));
    update.add_systems(trigger_zone_system.after(movement));
    update.add_systems(select_player_animation.after(slide_movement));
    update.add_systems(animation.after(select_player_animation));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        update_world_time(&mut world, dt);
        script_input(&mut world, tick, cli.restart_at);
        update.run(&mut world);
        world.clear_trackers();
    }

    report(&mut world);
}

/// Scripted input: hold right the whole run, tap restart at the requested
/// tick. Enough to push the ball across the arena into the goal.
fn script_input(world: &mut World, tick: u32, restart_at: Option<u32>) {
    let mut input = world.resource_mut::<InputState>();
    input.settle();
    input.right.press();
    match restart_at {
        Some(at) if tick == at => input.restart.press(),
        Some(at) if tick == at + 1 => input.restart.release(),
        _ => {}
    }
}

/// Log the simulated time, final positions, and the banner state.
fn report(world: &mut World) {
    let time = world.resource::<WorldTime>();
    log::info!(
        "Simulated {} frames, {:.2}s",
        time.frame_count,
        time.elapsed
    );

    let mut positions = world.query::<(&Group, &MapPosition)>();
    for (group, position) in positions.iter(world) {
        log::info!(
            "{}: ({:.1}, {:.1})",
            group.name(),
            position.pos.x,
            position.pos.y
        );
    }

    let mut banners = world.query::<(&Group, &Visibility)>();
    for (group, visibility) in banners.iter(world) {
        log::info!("{} visible: {}", group.name(), visibility.visible);
    }
}
