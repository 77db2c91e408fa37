//! Frames shared by every spawned projectile.

use bevy_ecs::prelude::Resource;

use crate::components::framesequence::FrameSequence;
use crate::error::CoreError;
use crate::resources::imagestore::ImageSource;

/// Default sequence prefix for the player's basic shot.
pub const PLAYER_SHOT_PREFIX: &str = "data/shoot_";

#[derive(Resource, Debug, Clone)]
pub struct ProjectileFrames {
    pub frames: FrameSequence,
    /// Pixels climbed per tick by projectiles spawned with these frames.
    pub step: f32,
}

impl ProjectileFrames {
    pub fn load(source: &impl ImageSource, prefix: &str, step: f32) -> Result<Self, CoreError> {
        Ok(Self {
            frames: FrameSequence::from_source(source, prefix)?,
            step,
        })
    }
}
