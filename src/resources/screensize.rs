//! Render resolution resource.

use bevy_ecs::prelude::Resource;

/// Size of the camera buffer in pixels, mirrored here so systems that
/// only need the numbers don't have to borrow the camera.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
