//! Player ship: horizontal motion with inertia, banking frames and a
//! shooting animation that launches a shot when it completes.
//!
//! # Tick order
//!
//! 1. `velocity` moves one unit toward the requested velocity.
//! 2. `position.x += velocity`, then clamped to `[0, playfield_w - ship_w]`.
//! 3. A frame is chosen, shooting first:
//!    - while shooting, the shot sequence matching the sign of the current
//!      velocity is played; when it runs out the shot is launched and that
//!      sequence's first frame is shown;
//!    - otherwise [`step_bank`] picks a banking frame from the requested
//!      direction.
//!
//! # Banking
//!
//! Leaning into a turn walks through the left/right sequences one frame per
//! tick. Reversing direction first unwinds the opposite lean so the sprite
//! never jumps straight from full-left to full-right. [`Bank`] holds how far
//! the ship leans; it is either level or leaning one way, never both.

use std::fmt;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::debug;

use crate::components::framesequence::FrameSequence;
use crate::components::rect::Rect;
use crate::error::CoreError;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::imagestore::{Image, ImageSource};

/// Top horizontal speed in pixels per tick.
pub const MAX_SPEED: i32 = 6;
/// Launch point of a shot relative to the ship's top-left corner.
pub const LAUNCH_OFFSET: Vec2 = Vec2::new(18.0, -20.0);
/// Gap between the ship and the bottom of the playfield.
pub const BOTTOM_MARGIN: f32 = 5.0;

/// Frame sequences used by a ship.
#[derive(Debug, Clone)]
pub struct ShipFrames {
    /// Level, not shooting.
    pub still: FrameSequence,
    pub left: FrameSequence,
    pub right: FrameSequence,
    pub shoot_center: FrameSequence,
    pub shoot_left: FrameSequence,
    pub shoot_right: FrameSequence,
}

impl ShipFrames {
    /// Load the frames named after `base`: `{base}.png` for the still frame
    /// and the `{base}_left_`, `{base}_right_`, `{base}_shoot_`,
    /// `{base}_shoot_left_`, `{base}_shoot_right_` sequences.
    pub fn load(source: &impl ImageSource, base: &str) -> Result<Self, CoreError> {
        Ok(Self {
            still: FrameSequence::from_image(source, &format!("{base}.png"))?,
            left: FrameSequence::from_source(source, &format!("{base}_left_"))?,
            right: FrameSequence::from_source(source, &format!("{base}_right_"))?,
            shoot_center: FrameSequence::from_source(source, &format!("{base}_shoot_"))?,
            shoot_left: FrameSequence::from_source(source, &format!("{base}_shoot_left_"))?,
            shoot_right: FrameSequence::from_source(source, &format!("{base}_shoot_right_"))?,
        })
    }
}

/// How far the ship leans. [`step_bank`] only produces `Left(n)`/`Right(n)`
/// with `n >= 1` and reads a lean of zero as level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bank {
    #[default]
    Level,
    Left(usize),
    Right(usize),
}

impl Bank {
    fn left(n: usize) -> Self {
        if n == 0 { Bank::Level } else { Bank::Left(n) }
    }

    fn right(n: usize) -> Self {
        if n == 0 { Bank::Level } else { Bank::Right(n) }
    }

    /// Index into the left sequence, 0 when not leaning left.
    pub fn left_frame(&self) -> usize {
        match self {
            Bank::Left(n) => *n,
            _ => 0,
        }
    }

    /// Index into the right sequence, 0 when not leaning right.
    pub fn right_frame(&self) -> usize {
        match self {
            Bank::Right(n) => *n,
            _ => 0,
        }
    }
}

/// Which motion frame to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameChoice {
    Still,
    Left(usize),
    Right(usize),
}

/// Advance the banking state one tick for a requested horizontal velocity.
///
/// `left_len`/`right_len` are the lengths of the left and right sequences
/// and must be at least 1. A lean of zero is treated as level.
pub fn step_bank(
    bank: Bank,
    request: i32,
    left_len: usize,
    right_len: usize,
) -> (Bank, FrameChoice) {
    match (request.signum(), bank) {
        (-1, Bank::Right(n)) => unwind_right(n),
        (-1, _) => {
            let n = bank.left_frame();
            let n = if n + 1 < left_len { n + 1 } else { n };
            (Bank::left(n), FrameChoice::Left(n))
        }
        (1, Bank::Left(n)) => unwind_left(n),
        (1, _) => {
            let n = bank.right_frame();
            let n = if n + 1 < right_len { n + 1 } else { n };
            (Bank::right(n), FrameChoice::Right(n))
        }
        (_, Bank::Left(n)) => unwind_left(n),
        (_, Bank::Right(n)) => unwind_right(n),
        (_, Bank::Level) => (Bank::Level, FrameChoice::Still),
    }
}

fn unwind_left(n: usize) -> (Bank, FrameChoice) {
    let n = n.saturating_sub(1);
    (Bank::left(n), FrameChoice::Left(n))
}

fn unwind_right(n: usize) -> (Bank, FrameChoice) {
    let n = n.saturating_sub(1);
    (Bank::right(n), FrameChoice::Right(n))
}

/// Observable visual state of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipPose {
    Idle,
    TransitioningToLeft,
    TransitioningToRight,
    MovingLeft,
    MovingRight,
    Shooting,
}

/// Tunables normally read from [`GameConfig`](crate::resources::gameconfig::GameConfig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipSettings {
    pub max_speed: i32,
    pub launch_offset: Vec2,
    pub bottom_margin: f32,
}

impl Default for ShipSettings {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            launch_offset: LAUNCH_OFFSET,
            bottom_margin: BOTTOM_MARGIN,
        }
    }
}

/// Called with the launch position when a shot leaves the ship.
pub type ShotCallback = Box<dyn FnMut(Vec2) + Send + Sync>;

/// What the host should draw for a ship this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipFrame {
    pub image: Image,
    /// Top-left corner.
    pub position: Vec2,
    /// Launch position if a shot was fired on this tick.
    pub shot: Option<Vec2>,
}

#[derive(Component)]
pub struct Ship {
    frames: ShipFrames,
    settings: ShipSettings,
    position: Vec2,
    min_x: f32,
    max_x: f32,
    requested_velocity: i32,
    velocity: i32,
    bank: Bank,
    /// `None` when not shooting.
    shot_frame: Option<usize>,
    on_shot_fired: Option<ShotCallback>,
    image: Image,
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("position", &self.position)
            .field("requested_velocity", &self.requested_velocity)
            .field("velocity", &self.velocity)
            .field("bank", &self.bank)
            .field("shot_frame", &self.shot_frame)
            .field("image", &self.image.id)
            .finish()
    }
}

impl Ship {
    /// Ship with default settings on a `playfield` (width, height).
    pub fn new(frames: ShipFrames, playfield: Vec2) -> Self {
        Self::with_settings(frames, playfield, ShipSettings::default())
    }

    /// Place the ship horizontally centred, `bottom_margin` above the bottom
    /// edge. Horizontal bounds are fixed here from the playfield width and
    /// the still frame's width.
    pub fn with_settings(frames: ShipFrames, playfield: Vec2, settings: ShipSettings) -> Self {
        let still = frames.still.first().clone();
        let width = still.width as f32;
        let height = still.height as f32;
        let max_x = (playfield.x - width).max(0.0);
        let position = Vec2::new(max_x / 2.0, playfield.y - height - settings.bottom_margin);
        Self {
            frames,
            settings,
            position,
            min_x: 0.0,
            max_x,
            requested_velocity: 0,
            velocity: 0,
            bank: Bank::Level,
            shot_frame: None,
            on_shot_fired: None,
            image: still,
        }
    }

    pub fn with_shot_callback(
        mut self,
        callback: impl FnMut(Vec2) + Send + Sync + 'static,
    ) -> Self {
        self.on_shot_fired = Some(Box::new(callback));
        self
    }

    pub fn set_shot_callback(&mut self, callback: impl FnMut(Vec2) + Send + Sync + 'static) {
        self.on_shot_fired = Some(Box::new(callback));
    }

    pub fn go_left(&mut self) {
        self.requested_velocity = -self.settings.max_speed;
    }

    pub fn go_right(&mut self) {
        self.requested_velocity = self.settings.max_speed;
    }

    /// Release of the left control. Ignored unless the ship is still being
    /// asked to go left, so it cannot cancel a newer right request.
    pub fn no_left(&mut self) {
        if self.requested_velocity < 0 {
            self.stop();
        }
    }

    /// Release of the right control, mirror of [`Ship::no_left`].
    pub fn no_right(&mut self) {
        if self.requested_velocity > 0 {
            self.stop();
        }
    }

    pub fn stop(&mut self) {
        self.requested_velocity = 0;
    }

    /// Start the shooting animation. No-op while one is running.
    pub fn shoot(&mut self) {
        if self.shot_frame.is_some() {
            return;
        }
        self.shot_frame = Some(0);
    }

    /// Map a press/release message onto the movement and fire controls.
    pub fn process_input(&mut self, event: &InputEvent) {
        match (event.action, event.pressed) {
            (InputAction::Left, true) => self.go_left(),
            (InputAction::Left, false) => self.no_left(),
            (InputAction::Right, true) => self.go_right(),
            (InputAction::Right, false) => self.no_right(),
            (InputAction::Fire, true) => self.shoot(),
            (InputAction::Stop, true) => self.stop(),
            _ => {}
        }
    }

    pub fn tick(&mut self) -> ShipFrame {
        if self.velocity < self.requested_velocity {
            self.velocity += 1;
        } else if self.velocity > self.requested_velocity {
            self.velocity -= 1;
        }

        self.position.x += self.velocity as f32;
        self.position.x = self.position.x.clamp(self.min_x, self.max_x);

        let mut shot = None;
        let image = match self.shot_frame {
            Some(frame) => {
                let frame = frame + 1;
                let sequence = match self.velocity.signum() {
                    -1 => &self.frames.shoot_left,
                    1 => &self.frames.shoot_right,
                    _ => &self.frames.shoot_center,
                };
                if frame >= sequence.len() {
                    let image = sequence.first().clone();
                    self.shot_frame = None;
                    let launch = self.launch_position();
                    debug!("ship fired at ({}, {})", launch.x, launch.y);
                    if let Some(callback) = self.on_shot_fired.as_mut() {
                        callback(launch);
                    }
                    shot = Some(launch);
                    image
                } else {
                    self.shot_frame = Some(frame);
                    sequence[frame].clone()
                }
            }
            None => {
                let (bank, choice) = step_bank(
                    self.bank,
                    self.requested_velocity,
                    self.frames.left.len(),
                    self.frames.right.len(),
                );
                self.bank = bank;
                match choice {
                    FrameChoice::Still => self.frames.still.first().clone(),
                    FrameChoice::Left(n) => self.frames.left[n].clone(),
                    FrameChoice::Right(n) => self.frames.right[n].clone(),
                }
            }
        };

        self.image = image.clone();
        ShipFrame {
            image,
            position: self.position,
            shot,
        }
    }

    /// Where a shot fired now would start.
    pub fn launch_position(&self) -> Vec2 {
        self.position + self.settings.launch_offset
    }

    pub fn pose(&self) -> ShipPose {
        if self.shot_frame.is_some() {
            return ShipPose::Shooting;
        }
        let full_left = self.bank.left_frame() + 1 >= self.frames.left.len();
        let full_right = self.bank.right_frame() + 1 >= self.frames.right.len();
        match self.requested_velocity.signum() {
            -1 if full_left && !matches!(self.bank, Bank::Right(_)) => ShipPose::MovingLeft,
            -1 => ShipPose::TransitioningToLeft,
            1 if full_right && !matches!(self.bank, Bank::Left(_)) => ShipPose::MovingRight,
            1 => ShipPose::TransitioningToRight,
            _ => ShipPose::Idle,
        }
    }

    pub fn is_shooting(&self) -> bool {
        self.shot_frame.is_some()
    }

    pub fn shot_frame(&self) -> Option<usize> {
        self.shot_frame
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn requested_velocity(&self) -> i32 {
        self.requested_velocity
    }

    /// Allowed range of the top-left x coordinate.
    pub fn horizontal_bounds(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    /// Image shown on the last tick.
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn area(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.image.width as f32,
            self.image.height as f32,
        )
    }
}
