use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `frame_count` is the monotonically increasing step counter shown by the
/// debug overlay; `delta` is the scaled length of the current frame in seconds.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
