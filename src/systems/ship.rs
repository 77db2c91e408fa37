//! Ship systems.
//!
//! - [`ship_input`] applies this tick's [`InputEvent`]s to every ship.
//! - [`ship_update`] steps motion and frames, queues the draw and announces
//!   launched shots as [`ShotFired`] messages.

use bevy_ecs::prelude::*;

use crate::components::ship::Ship;
use crate::events::input::InputEvent;
use crate::events::shot::ShotFired;
use crate::resources::drawqueue::{DrawQueue, Renderer};

/// Feed pending input messages to each ship, in arrival order.
pub fn ship_input(mut reader: MessageReader<InputEvent>, mut query: Query<&mut Ship>) {
    for event in reader.read() {
        for mut ship in query.iter_mut() {
            ship.process_input(event);
        }
    }
}

/// Advance every ship one tick.
pub fn ship_update(
    mut query: Query<(Entity, &mut Ship)>,
    mut draws: ResMut<DrawQueue>,
    mut shots: MessageWriter<ShotFired>,
) {
    for (entity, mut ship) in query.iter_mut() {
        let frame = ship.tick();
        draws.draw_at(&frame.image, frame.position);
        if let Some(position) = frame.shot {
            shots.write(ShotFired {
                source: entity,
                position,
            });
        }
    }
}
