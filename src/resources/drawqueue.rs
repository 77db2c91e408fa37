//! Renderer collaborator.
//!
//! Entities hand their image and position for the tick to a [`Renderer`].
//! Inside the ECS world that renderer is the [`DrawQueue`] resource: systems
//! append draw commands and the host drains them once per frame and blits
//! them with whatever backend it owns.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::resources::imagestore::Image;

/// Side-effecting draw target.
pub trait Renderer {
    /// Make `image` visible at `position` (top-left) on the next present.
    fn draw_at(&mut self, image: &Image, position: Vec2);
}

/// A single queued blit.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub image: Image,
    pub position: Vec2,
}

/// Draw commands recorded during the current tick, in submission order.
#[derive(Resource, Debug, Default)]
pub struct DrawQueue {
    pub commands: Vec<DrawCommand>,
}

impl DrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every queued command, leaving the queue empty for the next tick.
    pub fn drain(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for DrawQueue {
    fn draw_at(&mut self, image: &Image, position: Vec2) {
        self.commands.push(DrawCommand {
            image: image.clone(),
            position,
        });
    }
}
