//! World-space viewport resource.
//!
//! The layer viewport is the window into the game world: whatever falls
//! inside it ends up on screen, mapped through the matching
//! [`ScreenViewport`](crate::resources::screenviewport::ScreenViewport).
//! The owning scene refreshes it each frame to pan or zoom the view.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Visible world window: center plus width/height in world units.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct LayerViewport {
    pub center: Vector2,
    pub width: f32,
    pub height: f32,
}

impl LayerViewport {
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vector2::new(center_x, center_y),
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.width * 0.5
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.width * 0.5
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.height * 0.5
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.height * 0.5
    }
}
