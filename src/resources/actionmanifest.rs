//! Action manifest loading.
//!
//! Describes an actor's actions as data so content can change without
//! touching code:
//!
//! ```json
//! {
//!   "actions": [
//!     { "name": "initial", "prefix": "data/hero_idle_" },
//!     { "name": "die", "prefix": "data/hero_die_", "mode": "no_loop" }
//!   ]
//! }
//! ```
//!
//! Building the [`ActionSet`] resolves every prefix against an
//! [`ImageSource`]; a prefix with no frames is an image-not-found error and an
//! unknown action name is an action-not-found error.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::components::actionset::{Action, ActionSet};
use crate::components::animationcycle::{AnimationCycle, PlayMode};
use crate::components::framesequence::FrameSequence;
use crate::error::CoreError;
use crate::resources::imagestore::ImageSource;

/// One action entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDef {
    /// Action name, e.g. `"initial"` or `"walk"`.
    pub name: String,
    /// Image sequence prefix.
    pub prefix: String,
    #[serde(default)]
    pub mode: PlayMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionManifest {
    pub actions: Vec<ActionDef>,
}

impl ActionManifest {
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::Manifest(e.to_string()))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| CoreError::Manifest(format!("failed to read {}: {}", path.display(), e)))?;
        let manifest = Self::from_json_str(&contents)?;
        info!(
            "Loaded action manifest {} with {} actions",
            path.display(),
            manifest.actions.len()
        );
        Ok(manifest)
    }

    /// Resolve every entry into an [`ActionSet`].
    pub fn build_action_set(&self, source: &impl ImageSource) -> Result<ActionSet, CoreError> {
        let mut set = ActionSet::new();
        for def in &self.actions {
            let action: Action = def.name.parse()?;
            let frames = FrameSequence::from_source(source, &def.prefix)?;
            set.add_action(action, AnimationCycle::new(frames).with_mode(def.mode));
        }
        Ok(set)
    }
}
