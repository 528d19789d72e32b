//! Time update system.
//!
//! Writes the shared [`FrameTime`](crate::resources::frametime::FrameTime)
//! resource once per frame, before the update schedule runs.

use bevy_ecs::prelude::*;

use crate::resources::frametime::FrameTime;

/// Record the frame delta and accumulate elapsed seconds.
pub fn advance_frame_time(world: &mut World, dt: f32) {
    let mut time = world.resource_mut::<FrameTime>();
    time.elapsed += dt;
    time.delta = dt;
}
