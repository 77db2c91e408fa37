//! Tick schedule integration tests: ships, projectiles and actors driven
//! through a real ECS world with an in-memory image store.

use bevy_ecs::prelude::*;
use glam::Vec2;

use shmupcore::components::actionset::{Action, ActionSet};
use shmupcore::components::actor::Actor;
use shmupcore::components::animationcycle::{AnimationCycle, PlayMode};
use shmupcore::components::framesequence::FrameSequence;
use shmupcore::components::projectile::Projectile;
use shmupcore::components::ship::{MAX_SPEED, Ship, ShipFrames};
use shmupcore::events::animation::AnimationCompleted;
use shmupcore::events::input::{InputAction, InputEvent};
use shmupcore::resources::imagestore::ImageStore;
use shmupcore::resources::projectileframes::ProjectileFrames;
use shmupcore::systems::tick::{build_tick_schedule, init_core_resources, run_tick};

const FIELD: Vec2 = Vec2::new(200.0, 100.0);

fn store() -> ImageStore {
    let mut store = ImageStore::new();
    store.insert("data/ship.png", 40, 30);
    store.insert_sequence("data/ship_left_", 3, 40, 30);
    store.insert_sequence("data/ship_right_", 3, 40, 30);
    store.insert_sequence("data/ship_shoot_", 3, 40, 30);
    store.insert_sequence("data/ship_shoot_left_", 3, 40, 30);
    store.insert_sequence("data/ship_shoot_right_", 3, 40, 30);
    store.insert_sequence("data/shoot_", 2, 4, 10);
    store.insert_sequence("data/hero_idle_", 2, 16, 16);
    store.insert_sequence("data/hero_die_", 3, 16, 16);
    store
}

fn make_world(store: &ImageStore) -> World {
    let mut world = World::new();
    init_core_resources(&mut world);
    world.insert_resource(ProjectileFrames::load(store, "data/shoot_", 10.0).unwrap());
    world
}

fn spawn_ship(world: &mut World, store: &ImageStore) -> Entity {
    let frames = ShipFrames::load(store, "data/ship").unwrap();
    world.spawn(Ship::new(frames, FIELD)).id()
}

fn projectile_count(world: &mut World) -> usize {
    world.query::<&Projectile>().iter(world).count()
}

#[derive(Resource, Default)]
struct Completed(Vec<AnimationCompleted>);

fn collect_completed(mut reader: MessageReader<AnimationCompleted>, mut out: ResMut<Completed>) {
    out.0.extend(reader.read().copied());
}

#[test]
fn input_is_applied_in_the_same_tick() {
    let store = store();
    let mut world = make_world(&store);
    let ship = spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    run_tick(&mut world, &mut schedule, &[InputEvent::press(InputAction::Right)]);

    let ship = world.get::<Ship>(ship).unwrap();
    assert_eq!(ship.requested_velocity(), MAX_SPEED);
    assert_eq!(ship.velocity(), 1);
    assert_eq!(ship.position().x, 81.0);
}

#[test]
fn stale_release_does_not_cancel_newer_press() {
    let store = store();
    let mut world = make_world(&store);
    let ship = spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    run_tick(&mut world, &mut schedule, &[InputEvent::press(InputAction::Right)]);
    run_tick(&mut world, &mut schedule, &[InputEvent::press(InputAction::Left)]);
    run_tick(&mut world, &mut schedule, &[InputEvent::release(InputAction::Right)]);

    assert_eq!(world.get::<Ship>(ship).unwrap().requested_velocity(), -MAX_SPEED);
}

#[test]
fn ship_draw_is_queued_every_tick() {
    let store = store();
    let mut world = make_world(&store);
    spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    for _ in 0..5 {
        let draws = run_tick(&mut world, &mut schedule, &[]);
        assert_eq!(draws.len(), 1);
        assert_eq!(&*draws[0].image.id, "data/ship.png");
        assert_eq!(draws[0].position, Vec2::new(80.0, 65.0));
    }
}

#[test]
fn shot_spawns_projectile_that_flies_off_and_is_removed() {
    let store = store();
    let mut world = make_world(&store);
    spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    // ticks 1-2 play the shot sequence, tick 3 launches
    run_tick(&mut world, &mut schedule, &[InputEvent::press(InputAction::Fire)]);
    run_tick(&mut world, &mut schedule, &[]);
    assert_eq!(projectile_count(&mut world), 0);
    run_tick(&mut world, &mut schedule, &[]);
    assert_eq!(projectile_count(&mut world), 1);

    // the projectile is drawn from the next tick at the launch position
    let draws = run_tick(&mut world, &mut schedule, &[]);
    assert_eq!(draws.len(), 2);
    assert_eq!(&*draws[1].image.id, "data/shoot_00.png");
    assert_eq!(draws[1].position, Vec2::new(98.0, 45.0));

    // 45 -> -15 after six moves; height 10 means gone after the sixth
    for _ in 0..4 {
        run_tick(&mut world, &mut schedule, &[]);
        assert_eq!(projectile_count(&mut world), 1);
    }
    run_tick(&mut world, &mut schedule, &[]);
    assert_eq!(projectile_count(&mut world), 0);
}

#[test]
fn holding_fire_does_not_restart_the_shot() {
    let store = store();
    let mut world = make_world(&store);
    spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    let fire = [InputEvent::press(InputAction::Fire)];
    run_tick(&mut world, &mut schedule, &fire);
    run_tick(&mut world, &mut schedule, &fire);
    run_tick(&mut world, &mut schedule, &fire);
    assert_eq!(projectile_count(&mut world), 1);
}

#[test]
fn ship_stays_inside_playfield() {
    let store = store();
    let mut world = make_world(&store);
    let ship = spawn_ship(&mut world, &store);
    let mut schedule = build_tick_schedule();

    run_tick(&mut world, &mut schedule, &[InputEvent::press(InputAction::Right)]);
    for _ in 0..100 {
        run_tick(&mut world, &mut schedule, &[]);
        let x = world.get::<Ship>(ship).unwrap().position().x;
        assert!((0.0..=160.0).contains(&x));
    }
    assert_eq!(world.get::<Ship>(ship).unwrap().position().x, 160.0);
}

#[test]
fn actor_completion_is_reported_once() {
    let store = store();
    let mut world = make_world(&store);
    world.init_resource::<Completed>();

    let actions = ActionSet::new()
        .with_action(
            Action::Initial,
            AnimationCycle::new(FrameSequence::from_source(&store, "data/hero_idle_").unwrap()),
        )
        .with_action(
            Action::Die,
            AnimationCycle::new(FrameSequence::from_source(&store, "data/hero_die_").unwrap())
                .with_mode(PlayMode::NoLoop),
        );
    let mut actor = Actor::new(actions, None, Vec2::new(50.0, 50.0)).unwrap();
    actor.set_action(Action::Die).unwrap();
    let entity = world.spawn(actor).id();

    let mut schedule = build_tick_schedule();
    let mut collect = Schedule::default();
    collect.add_systems(collect_completed);

    let mut ids = Vec::new();
    for _ in 0..6 {
        let draws = run_tick(&mut world, &mut schedule, &[]);
        collect.run(&mut world);
        ids.push(draws[0].image.id.to_string());
    }

    assert_eq!(
        ids,
        vec![
            "data/hero_die_00.png",
            "data/hero_die_01.png",
            "data/hero_die_02.png",
            "data/hero_die_02.png",
            "data/hero_die_02.png",
            "data/hero_die_02.png",
        ]
    );
    let completed = &world.resource::<Completed>().0;
    assert_eq!(
        completed,
        &vec![AnimationCompleted {
            entity,
            action: Action::Die
        }]
    );
}
