//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: timing, configuration, the asset
//! store, and the per-frame viewport pair.
//!
//! Overview
//! - `frametime` – simulation time and delta for the current frame
//! - `gameconfig` – settings loaded from an INI configuration file
//! - `layerviewport` – world-space window the scene currently shows
//! - `screenviewport` – device-pixel rectangle the window is drawn into
//! - `texturestore` – loaded textures keyed by string IDs

pub mod frametime;
pub mod gameconfig;
pub mod layerviewport;
pub mod screenviewport;
pub mod texturestore;
