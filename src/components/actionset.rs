//! Named animation cycles for one actor.
//!
//! Action identifiers form a closed set ([`Action`]) so a typo in code is a
//! compile error. Names coming from data files are parsed through
//! [`Action::from_str`](std::str::FromStr) and fail with
//! [`CoreError::ActionNotFound`].

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::animationcycle::AnimationCycle;
use crate::error::CoreError;

/// Visual behaviours an actor can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Required entry point of every action set.
    Initial,
    Idle,
    Walk,
    Run,
    Attack,
    Hit,
    Die,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Initial,
        Action::Idle,
        Action::Walk,
        Action::Run,
        Action::Attack,
        Action::Hit,
        Action::Die,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Initial => "initial",
            Action::Idle => "idle",
            Action::Walk => "walk",
            Action::Run => "run",
            Action::Attack => "attack",
            Action::Hit => "hit",
            Action::Die => "die",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| CoreError::action_not_found(s))
    }
}

/// Mapping from [`Action`] to its animation cycle. Keys are unique; adding
/// an existing key replaces its cycle.
#[derive(Debug, Default)]
pub struct ActionSet {
    cycles: FxHashMap<Action, AnimationCycle>,
}

impl ActionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(mut self, action: Action, cycle: AnimationCycle) -> Self {
        self.add_action(action, cycle);
        self
    }

    /// Insert or overwrite the cycle for `action`.
    pub fn add_action(&mut self, action: Action, cycle: AnimationCycle) {
        self.cycles.insert(action, cycle);
    }

    pub fn contains(&self, action: Action) -> bool {
        self.cycles.contains_key(&action)
    }

    pub fn get(&self, action: Action) -> Result<&AnimationCycle, CoreError> {
        self.cycles
            .get(&action)
            .ok_or_else(|| CoreError::action_not_found(action.as_str()))
    }

    pub fn get_mut(&mut self, action: Action) -> Result<&mut AnimationCycle, CoreError> {
        self.cycles
            .get_mut(&action)
            .ok_or_else(|| CoreError::action_not_found(action.as_str()))
    }

    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.cycles.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }
}
