//! Tick systems.
//!
//! Submodules overview
//! - [`actor`] – forward input to actors and advance their actions
//! - [`projectile`] – spawn, move and clean up projectiles
//! - [`ship`] – apply input to ships and advance them
//! - [`tick`] – schedule wiring and the per-frame entry point for hosts

pub mod actor;
pub mod projectile;
pub mod ship;
pub mod tick;
