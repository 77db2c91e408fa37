//! Input action messages.
//!
//! The host polls its own window/keyboard backend and translates physical
//! keys into [`InputEvent`] messages. Press and release are tracked per
//! action, so a stale release of one direction can be told apart from a
//! newer press of the opposite one.

use bevy_ecs::message::Message;

/// Logical actions the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move left (default: Left arrow).
    Left,
    /// Move right (default: Right arrow).
    Right,
    /// Move up (default: Up arrow).
    Up,
    /// Move down (default: Down arrow).
    Down,
    /// Fire the ship's weapon (default: Space).
    Fire,
    /// Cancel any horizontal request.
    Stop,
    /// Toggle pause in the animation checker (default: Space).
    Pause,
    /// Pause and show the previous frame (default: PageUp).
    StepBack,
    /// Pause and show the next frame (default: PageDown).
    StepForward,
    /// Back/quit (default: Escape).
    Back,
}

/// Emitted when an input action is pressed (`pressed == true`) or released.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}

impl InputEvent {
    pub fn new(action: InputAction, pressed: bool) -> Self {
        Self { action, pressed }
    }

    pub fn press(action: InputAction) -> Self {
        Self::new(action, true)
    }

    pub fn release(action: InputAction) -> Self {
        Self::new(action, false)
    }
}
