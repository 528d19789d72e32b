//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities
//! in the game world. Components define the data a composite entity needs
//! to be placed and drawn: position, orientation, bounding extent, the
//! ordered image layers, and paint order.
//!
//! Submodules overview:
//! - [`halfextent`] – axis-aligned bounding half-extent in world units
//! - [`layerstack`] – ordered image layers and digit overlay slots
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rotation`] – orientation angle in degrees, clockwise-positive
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod halfextent;
pub mod layerstack;
pub mod mapposition;
pub mod rotation;
pub mod zindex;
