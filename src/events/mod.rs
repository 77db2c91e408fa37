//! Message types exchanged between the host and the tick systems.
//!
//! Submodules:
//! - [`animation`] – an actor's active cycle completed
//! - [`input`] – press/release of logical input actions
//! - [`shot`] – a ship launched a shot
pub mod animation;
pub mod input;
pub mod shot;
