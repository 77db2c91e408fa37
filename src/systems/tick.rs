//! Per-tick schedule.
//!
//! The host drives time: once per frame it writes the tick's input messages,
//! runs the schedule built by [`build_tick_schedule`] exactly once, then
//! drains the [`DrawQueue`]. Systems are chained so all input of a tick is
//! applied before anything reads it, and draws are queued ships first, then
//! actors, then projectiles.

use bevy_ecs::prelude::*;

use crate::events::animation::AnimationCompleted;
use crate::events::input::InputEvent;
use crate::events::shot::ShotFired;
use crate::resources::drawqueue::{DrawCommand, DrawQueue};
use crate::systems::actor::{actor_input, actor_update};
use crate::systems::projectile::{projectile_cleanup, projectile_update, spawn_projectiles};
use crate::systems::ship::{ship_input, ship_update};

/// Insert the message buffers and the draw queue the tick systems use.
pub fn init_core_resources(world: &mut World) {
    world.init_resource::<Messages<InputEvent>>();
    world.init_resource::<Messages<ShotFired>>();
    world.init_resource::<Messages<AnimationCompleted>>();
    world.init_resource::<DrawQueue>();
}

/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
/// drop messages every reader has had a chance to see.
pub fn update_core_messages(
    mut inputs: ResMut<Messages<InputEvent>>,
    mut shots: ResMut<Messages<ShotFired>>,
    mut completed: ResMut<Messages<AnimationCompleted>>,
) {
    inputs.update();
    shots.update();
    completed.update();
}

pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            (ship_input, actor_input),
            (ship_update, actor_update, projectile_update).chain(),
            spawn_projectiles,
            projectile_cleanup,
            update_core_messages,
        )
            .chain(),
    );
    schedule
}

/// Queue `inputs`, run one tick and return what to draw, in order.
pub fn run_tick(
    world: &mut World,
    schedule: &mut Schedule,
    inputs: &[InputEvent],
) -> Vec<DrawCommand> {
    {
        let mut messages = world.resource_mut::<Messages<InputEvent>>();
        for input in inputs {
            messages.write(*input);
        }
    }
    schedule.run(world);
    world.resource_mut::<DrawQueue>().drain()
}
