//! Positioned entity animated by a set of named actions.
//!
//! Each tick the actor shows the active cycle's current frame, centred on its
//! position. Input is not interpreted here: [`Actor::process_input`] hands
//! events to the attached [`Steering`] collaborator unmodified.

use std::fmt;
use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::Component;
use glam::Vec2;
use log::{debug, warn};

use crate::components::actionset::{Action, ActionSet};
use crate::components::animationcycle::{AnimationCycle, CycleEvent};
use crate::components::rect::Rect;
use crate::error::CoreError;
use crate::events::input::InputEvent;
use crate::resources::imagestore::Image;

/// External input handler attached to an actor.
pub trait Steering: Send {
    fn process_input(&mut self, event: &InputEvent);
}

/// Steering handle shared between the actor and whoever owns the controller.
pub type SharedSteering = Arc<Mutex<dyn Steering>>;

/// What the host should draw for an actor this tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorFrame {
    pub image: Image,
    /// Top-left corner of the bounding rectangle.
    pub position: Vec2,
    pub event: CycleEvent,
}

#[derive(Component)]
pub struct Actor {
    actions: ActionSet,
    current: Action,
    /// Centre of the actor.
    pub position: Vec2,
    image: Image,
    rect: Rect,
    steering: Option<SharedSteering>,
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("current", &self.current)
            .field("position", &self.position)
            .field("image", &self.image)
            .field("rect", &self.rect)
            .field("has_steering", &self.steering.is_some())
            .finish()
    }
}

impl Actor {
    /// Create an actor starting on [`Action::Initial`].
    ///
    /// Fails with [`CoreError::ActionNotFound`] if the set has no initial
    /// action.
    pub fn new(
        actions: ActionSet,
        steering: Option<SharedSteering>,
        position: Vec2,
    ) -> Result<Self, CoreError> {
        let image = actions.get(Action::Initial)?.current_frame().clone();
        let rect = Rect::centered(position, image.width as f32, image.height as f32);
        Ok(Self {
            actions,
            current: Action::Initial,
            position,
            image,
            rect,
            steering,
        })
    }

    pub fn current_action(&self) -> Action {
        self.current
    }

    /// Switch to `action`, restarting its cycle from frame 0.
    pub fn set_action(&mut self, action: Action) -> Result<(), CoreError> {
        self.actions.get_mut(action)?.reset();
        if self.current != action {
            debug!("actor action {} -> {}", self.current, action);
        }
        self.current = action;
        Ok(())
    }

    /// [`Actor::set_action`] for names coming from data or scripts.
    pub fn set_action_by_name(&mut self, name: &str) -> Result<(), CoreError> {
        self.set_action(name.parse()?)
    }

    /// Insert or overwrite an action. Replacing the active action's cycle
    /// takes effect on the next tick.
    pub fn add_action(&mut self, action: Action, cycle: AnimationCycle) {
        self.actions.add_action(action, cycle);
    }

    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Advance the active cycle and recompute the bounding rectangle from
    /// the frame being shown. Frames within an action may differ in size.
    pub fn tick(&mut self) -> Result<ActorFrame, CoreError> {
        let (image, event) = self.actions.get_mut(self.current)?.advance();
        self.rect = Rect::centered(self.position, image.width as f32, image.height as f32);
        self.image = image.clone();
        Ok(ActorFrame {
            image,
            position: self.rect.top_left(),
            event,
        })
    }

    /// Image shown on the last tick (or the initial frame before any tick).
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_steering(&mut self, steering: Option<SharedSteering>) {
        self.steering = steering;
    }

    /// Forward `event` to the steering collaborator, if any.
    pub fn process_input(&self, event: &InputEvent) {
        let Some(steering) = &self.steering else {
            return;
        };
        match steering.lock() {
            Ok(mut steering) => steering.process_input(event),
            Err(_) => warn!("actor steering lock poisoned, dropping {:?}", event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animationcycle::PlayMode;
    use crate::components::framesequence::FrameSequence;
    use crate::events::input::InputAction;

    fn cycle(prefix: &str, sizes: &[(u32, u32)]) -> AnimationCycle {
        let images = sizes
            .iter()
            .enumerate()
            .map(|(i, (w, h))| Image::new(format!("{prefix}{i:02}.png"), *w, *h))
            .collect();
        AnimationCycle::new(FrameSequence::new(images, prefix).unwrap())
    }

    fn actions() -> ActionSet {
        ActionSet::new()
            .with_action(Action::Initial, cycle("init_", &[(10, 10), (10, 10)]))
            .with_action(Action::Walk, cycle("walk_", &[(10, 10), (20, 30), (10, 10)]))
    }

    #[test]
    fn test_new_without_initial_fails() {
        let set = ActionSet::new().with_action(Action::Walk, cycle("walk_", &[(1, 1)]));
        let err = Actor::new(set, None, Vec2::ZERO).unwrap_err();
        assert_eq!(err, CoreError::action_not_found("initial"));
    }

    #[test]
    fn test_new_starts_on_initial() {
        let actor = Actor::new(actions(), None, Vec2::new(50.0, 50.0)).unwrap();
        assert_eq!(actor.current_action(), Action::Initial);
        assert_eq!(actor.rect(), Rect::new(45.0, 45.0, 10.0, 10.0));
    }

    #[test]
    fn test_set_action_missing() {
        let mut actor = Actor::new(actions(), None, Vec2::ZERO).unwrap();
        assert_eq!(
            actor.set_action(Action::Die).unwrap_err(),
            CoreError::action_not_found("die")
        );
        assert_eq!(actor.current_action(), Action::Initial);
        assert!(actor.set_action_by_name("flying").is_err());
    }

    #[test]
    fn test_set_action_restarts_cycle() {
        let mut actor = Actor::new(actions(), None, Vec2::ZERO).unwrap();
        actor.set_action(Action::Walk).unwrap();
        actor.tick().unwrap();
        actor.tick().unwrap();
        actor.set_action_by_name("walk").unwrap();
        let frame = actor.tick().unwrap();
        assert_eq!(&*frame.image.id, "walk_00.png");
    }

    #[test]
    fn test_tick_recenters_rect_on_frame_size() {
        let mut actor = Actor::new(actions(), None, Vec2::new(100.0, 100.0)).unwrap();
        actor.set_action(Action::Walk).unwrap();
        actor.tick().unwrap();
        let frame = actor.tick().unwrap();
        assert_eq!(&*frame.image.id, "walk_01.png");
        assert_eq!(actor.rect(), Rect::new(90.0, 85.0, 20.0, 30.0));
        assert_eq!(frame.position, Vec2::new(90.0, 85.0));
    }

    #[test]
    fn test_tick_reports_completion() {
        let mut actor = Actor::new(actions(), None, Vec2::ZERO).unwrap();
        actor.add_action(
            Action::Die,
            cycle("die_", &[(4, 4), (4, 4)]).with_mode(PlayMode::NoLoop),
        );
        actor.set_action(Action::Die).unwrap();
        assert_eq!(actor.tick().unwrap().event, CycleEvent::Advanced);
        assert_eq!(actor.tick().unwrap().event, CycleEvent::CycleCompleted);
        assert_eq!(actor.tick().unwrap().event, CycleEvent::Advanced);
    }

    struct Recorder(Vec<InputEvent>);

    impl Steering for Recorder {
        fn process_input(&mut self, event: &InputEvent) {
            self.0.push(*event);
        }
    }

    #[test]
    fn test_process_input_forwards_unmodified() {
        let recorder = Arc::new(Mutex::new(Recorder(Vec::new())));
        let steering: SharedSteering = recorder.clone();
        let actor = Actor::new(actions(), Some(steering), Vec2::ZERO).unwrap();
        let event = InputEvent::new(InputAction::Left, true);
        actor.process_input(&event);
        assert_eq!(recorder.lock().unwrap().0, vec![event]);
    }
}
