//! Window size resource.
//!
//! Tracks the dimensions of the window the frame is presented in, which may
//! differ from the render resolution. The ratio between the two is the
//! display scale shown by the debug overlay.

use bevy_ecs::prelude::Resource;

use crate::resources::screensize::ScreenSize;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Uniform scale that fits a `screen`-sized frame inside the window
    /// while preserving its aspect ratio.
    ///
    /// Returns `1.0` for a degenerate render size.
    pub fn scale_for(&self, screen: ScreenSize) -> f32 {
        if screen.w <= 0 || screen.h <= 0 {
            return 1.0;
        }
        let sx = self.w as f32 / screen.w as f32;
        let sy = self.h as f32 / screen.h as f32;
        sx.min(sy)
    }
}
