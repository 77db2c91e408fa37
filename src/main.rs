//! Shmup core headless host.
//!
//! Runs the animation/motion core without a window: images are registered
//! by size only, input is scripted, and every draw command is logged. Useful
//! to exercise content and tunables from the command line.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults if missing) and build the image store
//! 2. Spawn the ship (and an actor, if a manifest is given)
//! 3. For each tick: queue scripted input, run the tick schedule, log draws
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 120
//! cargo run -- --check-anim data/ship_left_ --ticks 7
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use glam::Vec2;
use log::{debug, error, info};

use shmupcore::components::actor::Actor;
use shmupcore::components::framesequence::FrameSequence;
use shmupcore::components::framestepper::FrameStepper;
use shmupcore::components::projectile::Projectile;
use shmupcore::components::ship::{Ship, ShipFrames};
use shmupcore::error::CoreError;
use shmupcore::events::input::{InputAction, InputEvent};
use shmupcore::resources::actionmanifest::ActionManifest;
use shmupcore::resources::drawqueue::DrawQueue;
use shmupcore::resources::gameconfig::GameConfig;
use shmupcore::resources::imagestore::ImageStore;
use shmupcore::resources::projectileframes::{PLAYER_SHOT_PREFIX, ProjectileFrames};
use shmupcore::systems::tick::{build_tick_schedule, init_core_resources, run_tick};

/// Headless driver for the shmup animation core
#[derive(Parser)]
#[command(version, about = "Runs the shmup animation core without a window.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 90)]
    ticks: u32,

    /// JSON action manifest for an extra actor.
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Step through the sequence with this prefix, print the last frame and exit.
    #[arg(long, value_name = "PREFIX")]
    check_anim: Option<String>,
}

/// Register every frame the demo uses, sized like the original sprites.
fn demo_image_store() -> ImageStore {
    let mut store = ImageStore::new();
    store.insert("data/ship.png", 48, 40);
    store.insert_sequence("data/ship_left_", 5, 48, 40);
    store.insert_sequence("data/ship_right_", 5, 48, 40);
    store.insert_sequence("data/ship_shoot_", 4, 48, 40);
    store.insert_sequence("data/ship_shoot_left_", 4, 48, 40);
    store.insert_sequence("data/ship_shoot_right_", 4, 48, 40);
    store.insert_sequence(PLAYER_SHOT_PREFIX, 3, 12, 24);
    store.insert_sequence("data/hero_idle_", 4, 32, 32);
    store.insert_sequence("data/hero_walk_", 6, 32, 36);
    store
}

/// Input for tick `n` of the demo run.
fn scripted_input(n: u32) -> Vec<InputEvent> {
    match n {
        0 => vec![InputEvent::press(InputAction::Right)],
        20 => vec![
            InputEvent::press(InputAction::Left),
            InputEvent::press(InputAction::Fire),
        ],
        // stale release of the older key: must not stop the ship
        25 => vec![InputEvent::release(InputAction::Right)],
        45 => vec![InputEvent::release(InputAction::Left)],
        50 => vec![InputEvent::press(InputAction::Fire)],
        _ => Vec::new(),
    }
}

/// Input for tick `n` of an animation check: drift right, pause, step
/// back and forth by hand, resume, and quit on the last tick.
fn scripted_check_input(n: u32, ticks: u32) -> Vec<InputEvent> {
    match n {
        _ if n + 1 == ticks => vec![InputEvent::press(InputAction::Back)],
        2 => vec![InputEvent::press(InputAction::Right)],
        4 => vec![InputEvent::release(InputAction::Right)],
        6 => vec![InputEvent::press(InputAction::Pause)],
        8 => vec![InputEvent::press(InputAction::StepBack)],
        9 => vec![
            InputEvent::press(InputAction::StepForward),
            InputEvent::press(InputAction::StepForward),
        ],
        11 => vec![InputEvent::press(InputAction::Pause)],
        _ => Vec::new(),
    }
}

fn check_anim(store: &ImageStore, prefix: &str, ticks: u32) -> Result<usize, CoreError> {
    let frames = FrameSequence::from_source(store, prefix)?;
    let mut stepper = FrameStepper::new(frames, Vec2::new(300.0, 300.0));
    let mut queue = DrawQueue::new();
    for n in 0..ticks {
        for event in scripted_check_input(n, ticks) {
            stepper.process_input(&event);
        }
        if stepper.quit_requested() {
            break;
        }
        stepper.update(&mut queue);
        for cmd in queue.drain() {
            debug!("draw {} at ({}, {})", cmd.image.id, cmd.position.x, cmd.position.y);
        }
    }
    Ok(stepper.frame())
}

fn run(cli: Cli) -> Result<(), CoreError> {
    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{e}; using defaults");
    }

    let store = demo_image_store();

    if let Some(prefix) = cli.check_anim {
        let last = check_anim(&store, &prefix, cli.ticks)?;
        println!("Last showed frame: {last}");
        return Ok(());
    }

    let playfield = config.playfield();
    let mut world = World::new();
    init_core_resources(&mut world);
    world.insert_resource(ProjectileFrames::load(
        &store,
        PLAYER_SHOT_PREFIX,
        config.projectile_step,
    )?);

    let ship = Ship::with_settings(
        ShipFrames::load(&store, "data/ship")?,
        playfield.size(),
        config.ship_settings(),
    );
    world.spawn(ship);

    if let Some(path) = &cli.manifest {
        let actions = ActionManifest::load_from_file(path)?.build_action_set(&store)?;
        let actor = Actor::new(actions, None, playfield.size() / 2.0)?;
        world.spawn(actor);
    }

    let mut schedule = build_tick_schedule();

    for n in 0..cli.ticks {
        let draws = run_tick(&mut world, &mut schedule, &scripted_input(n));
        for cmd in &draws {
            debug!(
                "tick {n}: draw {} at ({}, {})",
                cmd.image.id, cmd.position.x, cmd.position.y
            );
        }
    }

    let live = world.query::<&Projectile>().iter(&world).count();
    let mut ships = world.query::<&Ship>();
    for ship in ships.iter(&world) {
        info!(
            "ship at ({}, {}), velocity {}, pose {:?}",
            ship.position().x,
            ship.position().y,
            ship.velocity(),
            ship.pose()
        );
    }
    info!("{} ticks done, {} projectiles in flight", cli.ticks, live);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
