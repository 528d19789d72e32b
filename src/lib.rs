//! Card Engine library.
//!
//! Composite layered-sprite rendering on top of bevy_ecs and raylib: an
//! entity is an ordered stack of offset/scaled image layers sharing one
//! position and orientation, mapped into device pixels through a
//! layer/screen viewport pair. This module exposes the components,
//! resources, and systems for use in integration tests and as a reusable
//! library.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
