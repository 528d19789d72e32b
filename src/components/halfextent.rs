use bevy_ecs::prelude::Component;

/// Axis-aligned bounding half-extent of an entity in world units.
///
/// Layer offsets and scales are expressed as fractions of these values,
/// so the half-extent is the measuring unit for the whole layer stack.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct HalfExtent {
    /// Half-width in world units.
    pub w: f32,
    /// Half-height in world units.
    pub h: f32,
}

impl HalfExtent {
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}
