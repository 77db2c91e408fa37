//! Axis-aligned rectangle used as an entity's bounding area.
//!
//! Collision detection is left to the host; entities only expose their
//! current rectangle.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w` x `h` centred on `center`.
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}
