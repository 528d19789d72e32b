use bevy_ecs::prelude::Resource;

/// Simulation time for the current frame, in seconds.
///
/// Updated once per tick by
/// [`advance_frame_time`](crate::systems::time::advance_frame_time) before
/// any other system runs.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FrameTime {
    /// Seconds since the loop started.
    pub elapsed: f32,
    /// Seconds covered by this frame.
    pub delta: f32,
}
