//! Playfield size.
//!
//! The visible area entities move in, in pixels. Ships clamp to its width;
//! projectiles are destroyed once above its top edge.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Playfield {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }
}
