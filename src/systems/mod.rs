//! Engine systems.
//!
//! This module groups the code that advances simulation state and turns
//! layered entities into backend submissions.
//!
//! Submodules overview
//! - [`composite`] – offset transform and draw-op composition for layer stacks
//! - [`projection`] – pure world-to-screen mapping through the viewport pair
//! - [`render`] – draw sorted entities using raylib
//! - [`time`] – update simulation time and delta

pub mod composite;
pub mod projection;
pub mod render;
pub mod time;
