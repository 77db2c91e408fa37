//! ECS components and the plain data they are built from.
//!
//! Submodules overview:
//! - [`actionset`] – closed set of action identifiers mapped to animation cycles
//! - [`actor`] – positioned entity animated by its active action
//! - [`animationcycle`] – frame cursor with loop/no-loop and once-per-cycle completion
//! - [`framesequence`] – immutable, non-empty list of frames
//! - [`framestepper`] – manual forward/backward stepper for checking animations
//! - [`projectile`] – vertically travelling shot that flags itself destroyed
//! - [`rect`] – axis-aligned bounding rectangle
//! - [`ship`] – player ship motion, banking and shooting

pub mod actionset;
pub mod actor;
pub mod animationcycle;
pub mod framesequence;
pub mod framestepper;
pub mod projectile;
pub mod rect;
pub mod ship;
