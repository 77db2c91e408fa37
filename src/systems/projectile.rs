//! Projectile systems.
//!
//! Projectiles never remove themselves: [`projectile_update`] only moves and
//! draws them, and [`projectile_cleanup`] despawns the ones flagged
//! destroyed.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::projectile::Projectile;
use crate::events::shot::ShotFired;
use crate::resources::drawqueue::{DrawQueue, Renderer};
use crate::resources::projectileframes::ProjectileFrames;

/// Spawn one projectile per [`ShotFired`] message at its launch position.
pub fn spawn_projectiles(
    mut reader: MessageReader<ShotFired>,
    frames: Option<Res<ProjectileFrames>>,
    mut commands: Commands,
) {
    let Some(frames) = frames else {
        for shot in reader.read() {
            warn!("no ProjectileFrames resource, dropping shot from {:?}", shot.source);
        }
        return;
    };
    for shot in reader.read() {
        debug!("spawning projectile at ({}, {})", shot.position.x, shot.position.y);
        commands.spawn(
            Projectile::new(frames.frames.clone(), shot.position).with_step(frames.step),
        );
    }
}

/// Move and draw every live projectile.
pub fn projectile_update(mut query: Query<&mut Projectile>, mut draws: ResMut<DrawQueue>) {
    for mut projectile in query.iter_mut() {
        if let Some((image, position)) = projectile.tick() {
            draws.draw_at(&image, position);
        }
    }
}

/// Despawn projectiles that left the playfield.
pub fn projectile_cleanup(query: Query<(Entity, &Projectile)>, mut commands: Commands) {
    for (entity, projectile) in query.iter() {
        if projectile.destroyed() {
            commands.entity(entity).try_despawn();
        }
    }
}
