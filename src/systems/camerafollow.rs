//! Camera follow system.
//!
//! Centers the camera view on the player every frame. The view may end up
//! outside the world bounds here; [`Camera::draw_frame`] clamps it.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::resources::camera::Camera;

pub fn camera_follow_system(mut camera: ResMut<Camera>, players: Query<&Player>) {
    let Some(player) = players.iter().next() else {
        return;
    };
    let (cx, cy) = player.body.center();
    camera.center_on(cx, cy);
}
