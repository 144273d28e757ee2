//! Animation playback system.
//!
//! Advances the step counter of every sprite once per frame. The frame a
//! sprite shows is derived from that step by its animation, see
//! [`Animation::frame_index`](crate::resources::animation::Animation::frame_index).

use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::components::target::Target;

pub fn animation_step_system(
    mut players: Query<&mut Player>,
    mut enemies: Query<&mut Enemy>,
    mut targets: Query<&mut Target>,
) {
    for mut player in players.iter_mut() {
        player.sprite.tick();
    }
    for mut enemy in enemies.iter_mut() {
        if let Some(sprite) = enemy.sprite.as_mut() {
            sprite.tick();
        }
    }
    for mut target in targets.iter_mut() {
        if let Some(sprite) = target.sprite.as_mut() {
            sprite.tick();
        }
    }
}
