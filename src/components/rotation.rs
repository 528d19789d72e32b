use bevy_ecs::prelude::Component;

/// Orientation in degrees. Positive values turn clockwise on screen,
/// which is also raylib's rotation direction for `draw_texture_pro`.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }

    /// Angle in radians for rotating world-space offsets. World y points
    /// down like screen y, so the standard rotation formula already turns
    /// clockwise and no sign flip is needed.
    pub fn radians(&self) -> f32 {
        self.degrees.to_radians()
    }
}
