//! ECS resources made available to systems, and the values the host reads
//! before building the world.
//!
//! Overview
//! - `actionmanifest` – JSON description of an actor's actions
//! - `drawqueue` – renderer seam; draws recorded for the host to blit
//! - `gameconfig` – INI-backed gameplay tunables
//! - `imagestore` – image cache seam and its in-memory implementation
//! - `playfield` – size of the visible area
//! - `projectileframes` – frames shared by spawned projectiles
pub mod actionmanifest;
pub mod drawqueue;
pub mod gameconfig;
pub mod imagestore;
pub mod playfield;
pub mod projectileframes;
