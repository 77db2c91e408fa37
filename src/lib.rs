//! Shmup core library.
//!
//! Animation and motion core of a small 2D arcade shooter: sprite frame
//! cycles, named actions, a player ship with inertia and banking frames,
//! and vertically travelling projectiles. Image loading, windowing and the
//! main loop belong to the host, which talks to the core through the
//! [`resources::imagestore::ImageSource`] and
//! [`resources::drawqueue::Renderer`] seams and runs the ECS schedule from
//! [`systems::tick`] once per frame.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod systems;
