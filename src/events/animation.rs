//! Animation completion message.
//!
//! Written by the actor update system on the tick an actor's active cycle
//! completes, so game logic can react (switch to another action, despawn
//! after a death animation, ...) without registering callbacks.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::actionset::Action;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCompleted {
    pub entity: Entity,
    pub action: Action,
}
