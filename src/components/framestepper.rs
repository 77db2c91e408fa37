//! Manual frame stepper used to eyeball an animation.
//!
//! Unlike [`AnimationCycle`](crate::components::animationcycle::AnimationCycle)
//! it has no completion semantics: it wraps in both directions, can be
//! paused, and drifts by a speed vector so motion can be judged together
//! with the frames.
//!
//! # Controls
//!
//! - `Left`/`Right`/`Up`/`Down` press: change the drift speed by
//!   [`DRIFT_STEP`] on that axis. Release zeroes the axis only if its speed
//!   is still exactly one step that way.
//! - `Pause`: toggle pause.
//! - `StepBack`/`StepForward`: pause, set the playback direction and take
//!   one step.
//! - `Back`: request quit.

use glam::Vec2;

use crate::components::framesequence::FrameSequence;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::drawqueue::Renderer;

/// Speed change per drift key press, in pixels per tick.
pub const DRIFT_STEP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone)]
pub struct FrameStepper {
    frames: FrameSequence,
    frame: usize,
    direction: StepDirection,
    paused: bool,
    quit: bool,
    pub position: Vec2,
    pub speed: Vec2,
}

impl FrameStepper {
    pub fn new(frames: FrameSequence, position: Vec2) -> Self {
        Self {
            frames,
            frame: 0,
            direction: StepDirection::Forward,
            paused: false,
            quit: false,
            position,
            speed: Vec2::ZERO,
        }
    }

    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % self.frames.len();
    }

    pub fn prev_frame(&mut self) {
        self.frame = match self.frame {
            0 => self.frames.last_index(),
            n => n - 1,
        };
    }

    /// Switch playback direction and take one step that way.
    pub fn step_once(&mut self, direction: StepDirection) {
        self.direction = direction;
        self.step();
    }

    fn step(&mut self) {
        match self.direction {
            StepDirection::Forward => self.next_frame(),
            StepDirection::Backward => self.prev_frame(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Apply one control message (see the module docs for the mapping).
    pub fn process_input(&mut self, event: &InputEvent) {
        match (event.action, event.pressed) {
            (InputAction::Left, true) => self.speed.x -= DRIFT_STEP,
            (InputAction::Left, false) => release_drift(&mut self.speed.x, -DRIFT_STEP),
            (InputAction::Right, true) => self.speed.x += DRIFT_STEP,
            (InputAction::Right, false) => release_drift(&mut self.speed.x, DRIFT_STEP),
            (InputAction::Up, true) => self.speed.y -= DRIFT_STEP,
            (InputAction::Up, false) => release_drift(&mut self.speed.y, -DRIFT_STEP),
            (InputAction::Down, true) => self.speed.y += DRIFT_STEP,
            (InputAction::Down, false) => release_drift(&mut self.speed.y, DRIFT_STEP),
            (InputAction::Pause, true) => self.toggle_pause(),
            (InputAction::StepBack, true) => {
                self.paused = true;
                self.step_once(StepDirection::Backward);
            }
            (InputAction::StepForward, true) => {
                self.paused = true;
                self.step_once(StepDirection::Forward);
            }
            (InputAction::Back, true) => self.quit = true,
            _ => {}
        }
    }

    /// Draw the current frame, then step (unless paused) and drift.
    pub fn update(&mut self, renderer: &mut impl Renderer) {
        renderer.draw_at(&self.frames[self.frame], self.position);
        if !self.paused {
            self.step();
        }
        self.position += self.speed;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn direction(&self) -> StepDirection {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

// A release only stops the axis if no other press changed its speed since.
fn release_drift(speed: &mut f32, pressed: f32) {
    if *speed == pressed {
        *speed = 0.0;
    }
}
