//! Shot-fired message.
//!
//! Written by the ship update system on the tick a shooting animation
//! completes. The projectile spawner reads it and places a new projectile at
//! the launch position.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use glam::Vec2;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ShotFired {
    /// Ship that fired.
    pub source: Entity,
    /// Top-left of the new projectile.
    pub position: Vec2,
}
