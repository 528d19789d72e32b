//! Device-pixel viewport resource.

use bevy_ecs::prelude::Resource;

/// Rectangle in device pixels that the
/// [`LayerViewport`](crate::resources::layerviewport::LayerViewport)'s
/// contents are drawn into. Usually the whole window, but a sub-rectangle
/// works the same way (split screen, HUD insets).
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenViewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenViewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Full-window viewport for the given framebuffer size.
    pub fn full_window(w: i32, h: i32) -> Self {
        Self::new(0.0, 0.0, w as f32, h as f32)
    }
}
