//! Simulation clock advance.
//!
//! Runs outside the schedule, once before every frame, so every system of
//! that frame sees the same [`WorldTime`].
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance [`WorldTime`] by one frame of `dt` unscaled seconds.
///
/// `delta` becomes `dt * time_scale` and `frame_count` goes up by one
/// regardless of the scale, so a paused clock (`time_scale == 0`) still
/// counts frames.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.delta = dt * wt.time_scale;
    wt.frame_count += 1;
}
