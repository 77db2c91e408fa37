//! Vertically travelling shot.
//!
//! A projectile climbs a fixed step per tick while looping its frames. Once
//! it is entirely above the top edge it flags itself destroyed and stops
//! drawing; removing it is up to whoever owns the collection (see
//! [`projectile_cleanup`](crate::systems::projectile::projectile_cleanup)).

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::debug;

use crate::components::framesequence::FrameSequence;
use crate::components::rect::Rect;
use crate::resources::imagestore::Image;

/// Pixels climbed per tick.
pub const PROJECTILE_STEP: f32 = 10.0;

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    /// Top-left corner.
    pub position: Vec2,
    frames: FrameSequence,
    cursor: usize,
    step: f32,
    destroyed: bool,
}

impl Projectile {
    pub fn new(frames: FrameSequence, position: Vec2) -> Self {
        Self {
            position,
            frames,
            cursor: 0,
            step: PROJECTILE_STEP,
            destroyed: false,
        }
    }

    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Draw-and-move for one tick.
    ///
    /// Returns the image and the position to draw it at (the pre-move
    /// position), or `None` once destroyed.
    pub fn tick(&mut self) -> Option<(Image, Vec2)> {
        if self.destroyed || self.above_top_edge() {
            self.destroyed = true;
            return None;
        }

        let image = self.frames[self.cursor].clone();
        let drawn_at = self.position;

        self.position.y -= self.step;
        self.cursor = (self.cursor + 1) % self.frames.len();

        if self.above_top_edge() {
            debug!("projectile left the playfield at x={}", self.position.x);
            self.destroyed = true;
        }
        Some((image, drawn_at))
    }

    fn above_top_edge(&self) -> bool {
        self.position.y <= -self.height()
    }

    fn width(&self) -> f32 {
        self.frames.first().width as f32
    }

    fn height(&self) -> f32 {
        self.frames.first().height as f32
    }

    pub fn destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current bounding rectangle, for collision checks done by the host.
    pub fn area(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(height: u32, frames: usize, y: f32) -> Projectile {
        let images = (0..frames)
            .map(|i| Image::new(format!("data/shoot_{i:02}.png"), 4, height))
            .collect();
        Projectile::new(FrameSequence::new(images, "shot").unwrap(), Vec2::new(30.0, y))
    }

    fn ticks_until_destroyed(p: &mut Projectile) -> usize {
        let mut ticks = 0;
        while !p.destroyed() {
            p.tick();
            ticks += 1;
            assert!(ticks < 1000);
        }
        ticks
    }

    #[test]
    fn test_destroyed_after_ceil_ticks() {
        for height in [1u32, 8, 10, 15, 20] {
            let mut p = shot(height, 3, 100.0);
            let expected = ((100.0 + height as f32) / PROJECTILE_STEP).ceil() as usize;
            assert_eq!(ticks_until_destroyed(&mut p), expected, "height {height}");
        }
    }

    #[test]
    fn test_no_draw_once_destroyed() {
        let mut p = shot(8, 2, 100.0);
        ticks_until_destroyed(&mut p);
        let y = p.position.y;
        assert!(p.tick().is_none());
        assert!(p.tick().is_none());
        assert!(p.destroyed());
        assert_eq!(p.position.y, y);
    }

    #[test]
    fn test_draws_before_moving_and_loops_frames() {
        let mut p = shot(8, 2, 100.0);
        let (img, at) = p.tick().unwrap();
        assert_eq!(&*img.id, "data/shoot_00.png");
        assert_eq!(at, Vec2::new(30.0, 100.0));
        assert_eq!(p.position.y, 90.0);

        let (img, _) = p.tick().unwrap();
        assert_eq!(&*img.id, "data/shoot_01.png");
        let (img, _) = p.tick().unwrap();
        assert_eq!(&*img.id, "data/shoot_00.png");
        assert_eq!(p.cursor(), 1);
    }

    #[test]
    fn test_position_strictly_decreases() {
        let mut p = shot(8, 1, 50.0);
        let mut last = p.position.y;
        while p.tick().is_some() {
            assert_eq!(p.position.y, last - PROJECTILE_STEP);
            last = p.position.y;
        }
    }

    #[test]
    fn test_starting_off_screen_is_destroyed_without_draw() {
        let mut p = shot(8, 1, -20.0);
        assert!(p.tick().is_none());
        assert!(p.destroyed());
    }

    #[test]
    fn test_area() {
        let p = shot(8, 1, 100.0);
        assert_eq!(p.area(), Rect::new(30.0, 100.0, 4.0, 8.0));
    }

    #[test]
    fn test_custom_step() {
        let mut p = shot(8, 1, 100.0).with_step(25.0);
        p.tick();
        assert_eq!(p.position.y, 75.0);
    }
}
