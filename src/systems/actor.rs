//! Actor systems.
//!
//! - [`actor_input`] forwards input messages to each actor's steering.
//! - [`actor_update`] advances the active action, queues the draw, and
//!   writes [`AnimationCompleted`] on the tick a cycle completes.

use bevy_ecs::prelude::*;
use log::error;

use crate::components::actor::Actor;
use crate::components::animationcycle::CycleEvent;
use crate::events::animation::AnimationCompleted;
use crate::events::input::InputEvent;
use crate::resources::drawqueue::{DrawQueue, Renderer};

pub fn actor_input(mut reader: MessageReader<InputEvent>, query: Query<&Actor>) {
    for event in reader.read() {
        for actor in query.iter() {
            actor.process_input(event);
        }
    }
}

pub fn actor_update(
    mut query: Query<(Entity, &mut Actor)>,
    mut draws: ResMut<DrawQueue>,
    mut completed: MessageWriter<AnimationCompleted>,
) {
    for (entity, mut actor) in query.iter_mut() {
        match actor.tick() {
            Ok(frame) => {
                draws.draw_at(&frame.image, frame.position);
                if frame.event == CycleEvent::CycleCompleted {
                    completed.write(AnimationCompleted {
                        entity,
                        action: actor.current_action(),
                    });
                }
            }
            Err(e) => error!("actor {:?} skipped: {}", entity, e),
        }
    }
}
